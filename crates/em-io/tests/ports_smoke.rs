use em_core::AdcChannel;
use em_io::*;

fn read_pair(reader: &mut impl ChannelReader) -> IoResult<(u16, u16)> {
    let c = reader.read_channel(AdcChannel::CURRENT)?;
    let v = reader.read_channel(AdcChannel::VOLTAGE)?;
    Ok((c.value(), v.value()))
}

#[test]
fn reads_fail_after_close() {
    let mut adc = SimulatedAdc::constant(775, 310);
    assert_eq!(read_pair(&mut adc).unwrap(), (775, 310));

    adc.close().unwrap();
    assert!(!adc.is_open());
    assert!(matches!(read_pair(&mut adc), Err(IoError::BusClosed)));

    // closing again is fine
    adc.close().unwrap();
}

#[test]
fn injected_read_fault() {
    let mut adc = SimulatedAdc::constant(775, 310).fail_on_read(3);
    assert!(read_pair(&mut adc).is_ok());
    let err = read_pair(&mut adc).unwrap_err();
    assert!(err.to_string().contains("adc read"));
    assert_eq!(adc.reads(), 4);
}

#[test]
fn relay_set_is_idempotent() {
    let mut relay = SimulatedRelay::new();
    relay.set(true).unwrap();
    relay.set(true).unwrap();
    assert!(relay.is_on());
    relay.set(false).unwrap();
    relay.set(false).unwrap();
    assert!(!relay.is_on());
    assert_eq!(relay.commands(), &[true, true, false, false]);
}
