use crate::error::ConfigError;
use crate::sim::{
    DEFAULT_DELAY_THRESHOLD_MS, DEFAULT_SEED, SimConfig, SimTime, SplitRoutingConfig, SwitchConfig,
};
use crate::topo::three_switch::{ThreeSwitchOpts, build_three_switch};

#[test]
fn default_config_is_the_three_switch_chain() {
    let cfg = SimConfig::default();
    cfg.validate().expect("default config is valid");
    assert_eq!(cfg.switches.len(), 3);
    let r = cfg.routing.as_ref().expect("routing");
    assert_eq!((r.from, r.primary, r.secondary), (0, 1, 2));
    assert_eq!(cfg.delay_threshold(), SimTime::from_millis(20));
    assert_eq!(cfg.horizon(), SimTime(u64::MAX));
}

#[test]
fn three_switch_opts_can_disable_routing_and_side_traffic() {
    let cfg = build_three_switch(&ThreeSwitchOpts {
        arrival_rate_switch_2: None,
        arrival_rate_switch_3: None,
        prob1_2: None,
        until_ms: Some(1_000),
        ..Default::default()
    });
    cfg.validate().expect("valid");
    assert!(cfg.routing.is_none());
    assert!(cfg.switches[1].arrival_rate_per_sec.is_none());
    assert!(cfg.switches[2].arrival_rate_per_sec.is_none());
    assert_eq!(cfg.horizon(), SimTime::from_secs(1));
}

#[test]
fn config_parses_minimal_json_with_defaults() {
    let raw = r#"
    {
        "switches": [ { "service_time_ms": 5.0, "arrival_rate_per_sec": 100.0 } ],
        "run_length": 10
    }
    "#;
    let cfg: SimConfig = serde_json::from_str(raw).expect("parse config");
    cfg.validate().expect("valid");
    assert_eq!(cfg.seed, DEFAULT_SEED);
    assert_eq!(cfg.delay_threshold_ms, DEFAULT_DELAY_THRESHOLD_MS);
    assert!(cfg.routing.is_none());
    assert!(cfg.until_ms.is_none());
    assert!(cfg.switches[0].name.is_none());
}

#[test]
fn validate_rejects_non_positive_rates_and_service_times() {
    let mut cfg = SimConfig::default();
    cfg.switches[1].arrival_rate_per_sec = Some(0.0);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositiveArrivalRate { switch: 1, .. })
    ));

    let mut cfg = SimConfig::default();
    cfg.switches[2].service_time_ms = -1.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositiveServiceTime { switch: 2, .. })
    ));

    let mut cfg = SimConfig::default();
    cfg.switches[0].arrival_rate_per_sec = Some(f64::NAN);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositiveArrivalRate { switch: 0, .. })
    ));
}

#[test]
fn validate_rejects_bad_routing() {
    let mut cfg = SimConfig::default();
    cfg.routing.as_mut().expect("routing").prob_primary = 1.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::ProbabilityOutOfRange(p)) if p == 1.5
    ));

    let mut cfg = SimConfig::default();
    cfg.routing.as_mut().expect("routing").secondary = 3;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::UnknownSwitch { index: 3, count: 3 })
    ));

    let mut cfg = SimConfig::default();
    cfg.routing.as_mut().expect("routing").primary = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::RoutingLoop(0))));
}

#[test]
fn validate_requires_switches_and_a_stop_condition() {
    let mut cfg = SimConfig::default();
    cfg.switches.clear();
    cfg.routing = None;
    assert!(matches!(cfg.validate(), Err(ConfigError::NoSwitches)));

    let mut cfg = SimConfig::default();
    cfg.run_length = None;
    cfg.until_ms = None;
    assert!(matches!(cfg.validate(), Err(ConfigError::NoStopCondition)));

    let mut cfg = SimConfig::default();
    cfg.delay_threshold_ms = -0.5;
    assert!(matches!(cfg.validate(), Err(ConfigError::NegativeThreshold(_))));
}

#[test]
fn from_json_file_reports_io_and_parse_errors() {
    let missing = std::env::temp_dir().join("switchsim-rs-definitely-missing.json");
    assert!(matches!(
        SimConfig::from_json_file(&missing),
        Err(ConfigError::Io(_))
    ));

    let path = std::env::temp_dir().join(format!(
        "switchsim-rs-bad-config-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{ not json").expect("write temp file");
    assert!(matches!(
        SimConfig::from_json_file(&path),
        Err(ConfigError::Json(_))
    ));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = SimConfig::default();
    let raw = serde_json::to_string(&cfg).expect("serialize");
    let decoded: SimConfig = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(decoded, cfg);
}

#[test]
fn validate_rejects_run_length_when_switch0_never_gets_packets() {
    let switch = |rate: Option<f64>| SwitchConfig {
        name: None,
        arrival_rate_per_sec: rate,
        service_time_ms: 5.0,
    };
    let mut cfg = SimConfig {
        seed: 1,
        switches: vec![switch(None), switch(Some(50.0))],
        routing: None,
        delay_threshold_ms: 20.0,
        run_length: Some(10),
        until_ms: None,
        progress_every: 0,
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::StopConditionUnreachable)
    ));

    // 有时间上限就能停下
    cfg.until_ms = Some(1_000);
    cfg.validate().expect("horizon stops the run");

    // switch 0 作为分流目标也能完成 packet
    cfg.until_ms = None;
    cfg.switches.push(switch(Some(10.0)));
    cfg.routing = Some(SplitRoutingConfig {
        from: 1,
        primary: 2,
        secondary: 0,
        prob_primary: 0.5,
    });
    cfg.validate().expect("switch 0 is fed by routing");
}
