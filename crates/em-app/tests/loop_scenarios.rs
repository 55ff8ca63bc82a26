use chrono::{NaiveDate, NaiveDateTime};
use em_app::*;
use em_controls::{Acs712Calibration, Controller, RelayState, convert_to_voltage};
use em_core::RawSample;
use em_io::{Actuator, ChannelReader, IoError, SimulatedAdc, SimulatedRelay};
use em_results::{LogRecord, RecordSink, ResultsError, ResultsResult};

/// Raw code treated as zero current in these tests.
const ZERO_CODE: u16 = 775;

fn controller() -> Controller {
    let zero = convert_to_voltage(RawSample::new(ZERO_CODE).unwrap());
    Controller {
        calibration: Acs712Calibration::new(zero, 0.066).unwrap(),
        ..Controller::default()
    }
}

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap()
}

fn new_loop(
    adc: SimulatedAdc,
    relay: SimulatedRelay,
) -> SamplingLoop<SimulatedAdc, SimulatedRelay, Vec<LogRecord>> {
    SamplingLoop::new(adc, relay, Vec::new(), controller()).with_clock(fixed_clock)
}

#[test]
fn zero_current_keeps_relay_off_and_energy_flat() {
    // 310 counts is ~1.0 V on the voltage channel
    let mut lp = new_loop(SimulatedAdc::constant(ZERO_CODE, 310), SimulatedRelay::new());
    let summary = lp.run(&mut CountdownTicker::new(2));

    assert!(matches!(summary.reason, ShutdownReason::Signaled));
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(summary.ticks, 3);
    assert_eq!(summary.relay_switches, 0);
    assert_eq!(summary.cumulative_energy_wh, 0.0);

    let records = lp.sink();
    assert_eq!(records.len(), 3);
    for r in records {
        assert_eq!(r.current_amps, 0.0);
        assert_eq!(r.power_w, 0.0);
        assert_eq!(r.actuator_state, RelayState::Off);
        assert!(!r.actuator_changed);
        assert_eq!(r.timestamp, fixed_clock());
    }
    // first tick jumps from the 0 V initial value, later ticks are steady
    assert!(records[0].voltage_fluctuation);
    assert!(!records[1].voltage_fluctuation);

    // only the shutdown command reached the relay
    assert_eq!(lp.actuator().commands(), &[false]);
    assert!(!lp.reader().is_open());
    assert_eq!(lp.phase(), LoopPhase::Stopped);
}

#[test]
fn relay_follows_hysteresis_across_ticks() {
    // +1 count is ~0.049 A (dead band), +2 counts ~0.098 A (on)
    let current = vec![
        ZERO_CODE,
        ZERO_CODE + 1,
        ZERO_CODE + 2,
        ZERO_CODE + 1,
        ZERO_CODE,
        ZERO_CODE + 1,
    ];
    let adc = SimulatedAdc::scripted(current, vec![310]);
    let mut lp = new_loop(adc, SimulatedRelay::new());
    let summary = lp.run(&mut CountdownTicker::new(5));

    let states: Vec<RelayState> = lp.sink().iter().map(|r| r.actuator_state).collect();
    use RelayState::{Off, On};
    assert_eq!(states, vec![Off, Off, On, On, Off, Off]);

    let changed: Vec<bool> = lp.sink().iter().map(|r| r.actuator_changed).collect();
    assert_eq!(changed, vec![false, false, true, false, true, false]);

    assert_eq!(summary.relay_switches, 2);
    assert_eq!(lp.actuator().commands(), &[true, false, false]);
}

#[test]
fn actuator_fault_releases_bus_and_commands_off() {
    let adc = SimulatedAdc::constant(ZERO_CODE + 20, 310);
    let relay = SimulatedRelay::new().fail_on_command(0);
    let mut lp = new_loop(adc, relay);
    let summary = lp.run(&mut CountdownTicker::new(10));

    assert!(matches!(
        summary.reason,
        ShutdownReason::Fault(AppError::Hardware(IoError::Injected { .. }))
    ));
    assert_eq!(summary.exit_code(), 1);
    assert!(summary.status_line().starts_with("Stopped after fault"));
    assert_eq!(summary.ticks, 0);

    // the failed switch-on, then the safe-state command
    assert_eq!(lp.actuator().commands(), &[true, false]);
    assert!(!lp.actuator().is_on());
    assert!(!lp.reader().is_open());
    // the faulted tick emitted nothing
    assert!(lp.sink().is_empty());
    // state was not committed
    assert!(!lp.state().actuator_on);
}

#[test]
fn read_fault_mid_run_stops_after_completed_ticks() {
    // two reads per tick: read 4 is the first read of the third tick
    let adc = SimulatedAdc::constant(ZERO_CODE, 310).fail_on_read(4);
    let mut lp = new_loop(adc, SimulatedRelay::new());
    let summary = lp.run(&mut CountdownTicker::new(10));

    assert!(summary.reason.is_fault());
    assert_eq!(summary.ticks, 2);
    assert_eq!(lp.sink().len(), 2);
    assert_eq!(lp.actuator().commands(), &[false]);
    assert!(!lp.reader().is_open());
}

struct FailingSink {
    closes: usize,
}

impl RecordSink for FailingSink {
    fn append(&mut self, _record: &LogRecord) -> ResultsResult<()> {
        Err(ResultsError::Io(std::io::Error::other("disk full")))
    }

    fn close(&mut self) -> ResultsResult<()> {
        self.closes += 1;
        Ok(())
    }
}

#[test]
fn sink_fault_is_fatal() {
    let adc = SimulatedAdc::constant(ZERO_CODE + 20, 310);
    let mut lp = SamplingLoop::new(adc, SimulatedRelay::new(), FailingSink { closes: 0 }, controller());
    let summary = lp.run(&mut CountdownTicker::new(10));

    assert!(matches!(summary.reason, ShutdownReason::Fault(AppError::Log(_))));
    assert!(summary.status_line().contains("disk full"));
    // relay switched on during the tick, then forced off
    assert_eq!(lp.actuator().commands(), &[true, false]);
    assert_eq!(lp.sink().closes, 1);
    assert!(!lp.reader().is_open());
}

#[test]
fn run_after_stop_does_not_release_twice() {
    let mut lp = new_loop(SimulatedAdc::constant(ZERO_CODE, 310), SimulatedRelay::new());
    lp.run(&mut CountdownTicker::new(0));
    let again = lp.run(&mut CountdownTicker::new(0));

    assert_eq!(again.ticks, 1);
    assert_eq!(lp.actuator().commands(), &[false]);
}

#[test]
fn energy_integrates_over_ticks() {
    let adc = SimulatedAdc::constant(ZERO_CODE + 20, 310);
    let mut lp = new_loop(adc, SimulatedRelay::new());
    let summary = lp.run(&mut CountdownTicker::new(9));

    let power = lp.sink()[0].power_w;
    assert!(power > 0.0);
    let expected = power * 10.0 / 3600.0;
    assert!((summary.cumulative_energy_wh - expected).abs() < 1e-12);
    let last = lp.sink().last().unwrap();
    assert_eq!(last.cumulative_energy_wh, summary.cumulative_energy_wh);
}
