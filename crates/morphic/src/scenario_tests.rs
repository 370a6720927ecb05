use crate::fixtures::{
    FromRecordOne, FromRecordTwo, IdOnly, RecordMapper, RecordMapperImpl, ToRecordThree,
};
use crate::{MapError, PrintTracer};

fn mapper() -> RecordMapperImpl {
    RecordMapperImpl::new().unwrap()
}

#[test]
fn multi_params_skip_unused_accessors() {
    let target = mapper().multi_params(FromRecordOne::patrick()).unwrap();
    assert_eq!(target.first_name, "Patrick");
    assert_eq!(target.sur_name, "Henderson");
}

#[test]
fn single_param() {
    let target = mapper().single_param(FromRecordOne::patrick()).unwrap();
    assert_eq!(target.sur_name, "Henderson");
}

#[test]
fn multi_constructor_generates_id() {
    let mapper = mapper();
    let first = mapper.multi_constructor(FromRecordTwo::patrick()).unwrap();
    let second = mapper.multi_constructor(FromRecordTwo::patrick()).unwrap();

    assert_eq!(first.first_name, "Patrick");
    assert_eq!(first.sur_name, "Henderson");
    assert_ne!(first.id, second.id, "`from_names` generates a fresh id per call");
}

#[test]
fn multi_default_constructor_keeps_id() {
    let source = FromRecordOne::patrick();
    let id = source.id;
    let target = mapper().multi_default_constructor(source).unwrap();
    assert_eq!(
        target,
        ToRecordThree::new(id, "Patrick".to_string(), "Henderson".to_string())
    );
}

#[test]
fn selector_picks_defaulting_constructor() {
    let mapper = mapper();
    let exact = FromRecordOne::patrick();
    let relaxed = FromRecordOne::patrick();
    let expected_ids = [exact.id, relaxed.id];

    let targets = [
        mapper.selected_constructor(exact).unwrap(),
        mapper.selected_constructor_ignoring_case(relaxed).unwrap(),
    ];
    for (target, id) in targets.into_iter().zip(expected_ids) {
        assert_eq!(target.id, id);
        assert_eq!(target.first_name, "Eva");
        assert_eq!(target.sur_name, "Henderson");
    }
}

#[test]
fn overrides_swap_names() {
    let target = mapper().swapped_names(FromRecordOne::patrick()).unwrap();
    assert_eq!(target.first_name, "Henderson");
    assert_eq!(target.sur_name, "Patrick");
}

#[test]
fn identity_passthrough_on_repeat_calls() {
    let mapper = mapper();
    for _ in 0..3 {
        assert_eq!(mapper.echo("jojo".to_string()).unwrap(), "jojo");
    }
    assert!(mapper.mapper().plans().is_empty());
}

#[test]
fn default_trait_methods_are_not_mapped() {
    let mapper = mapper();
    assert_eq!(mapper.describe(), "records");
    assert!(mapper.mapper().contract().get("describe").is_none());
}

#[test]
fn override_requires_parameter_names() {
    let err = mapper()
        .override_without_names(FromRecordTwo::patrick())
        .unwrap_err();
    insta::assert_snapshot!(err, @"constructor parameter names must be present when using field overrides: `ToRecordThree::from_names` does not retain them, only the primary constructor of a type retains its parameter names");
}

#[test]
fn selector_with_unknown_name() {
    let err = mapper()
        .unknown_selector_name(FromRecordOne::patrick())
        .unwrap_err();
    insta::assert_snapshot!(err, @"constructor selector names accessor `country` but `FromRecordOne` has no such accessor");
}

#[test]
fn override_with_unknown_source() {
    let err = mapper()
        .unknown_override_source(FromRecordOne::patrick())
        .unwrap_err();
    assert!(matches!(err, MapError::OverrideAccessorNotFound { .. }));
}

#[test]
fn no_constructor_satisfied() {
    let source = IdOnly {
        id: uuid::Uuid::new_v4(),
    };
    let err = mapper().nothing_matches(source).unwrap_err();
    insta::assert_snapshot!(err, @"no constructor of `ToRecordTwo` can be satisfied by the accessors of `IdOnly`");
}

#[test]
fn selector_trace() {
    let mapper = mapper();
    let mut tracer = PrintTracer::new();
    let _: ToRecordThree = mapper
        .mapper()
        .map_traced("selected_constructor", FromRecordOne::patrick(), &mut tracer)
        .unwrap();

    insta::assert_snapshot!(tracer.dump(), @r"
    call selected_constructor: FromRecordOne -> ToRecordThree
    accessors [id, firstName, surName]
    plan miss selected_constructor
      select id -> id
      select surName -> surName
    construct with_sur_name/2
      bind #0 <- id (selector)
      bind #1 <- surName (selector)
    ");
}

#[test]
fn log_tracer_emits_events() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("morphic_engine=trace"))
        .with_test_writer()
        .try_init();

    let target = mapper().multi_params(FromRecordOne::patrick()).unwrap();
    assert_eq!(target.sur_name, "Henderson");
}
