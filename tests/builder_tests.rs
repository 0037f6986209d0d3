//! The authoring shapes: every way of producing a descriptor with the same
//! intent must yield an observably equivalent descriptor.

use katha::{
    params, scenario, skip, skip_because, Arity, ErrorKind, ParamSet, ScenarioDescriptor,
    ScenarioFn, StepResult,
};
use rstest::rstest;

fn create_user() -> StepResult {
    Ok(())
}

fn create_user_with(args: &katha::Args) -> StepResult {
    katha::ensure!(args.len() == 1);
    Ok(())
}

async fn update_user() -> StepResult {
    Ok(())
}

fn assert_equivalent(a: &ScenarioDescriptor, b: &ScenarioDescriptor) {
    assert_eq!(a.name(), b.name());
    assert_eq!(a.decorators(), b.decorators());
    assert_eq!(a.params(), b.params());
    assert_eq!(a.scenario_fn().arity(), b.scenario_fn().arity());
    assert_eq!(a.scenario_fn().is_async(), b.scenario_fn().is_async());
}

#[rstest]
#[case::optional_call(scenario().apply("create_user", ScenarioFn::sync(create_user)).unwrap())]
#[case::macro_form(scenario!(create_user).unwrap())]
fn plain_shapes_are_equivalent(#[case] shaped: ScenarioDescriptor) {
    let direct = ScenarioDescriptor::of("create_user", ScenarioFn::sync(create_user)).unwrap();
    assert_equivalent(&direct, &shaped);
}

#[rstest]
#[case::builder_form(
    scenario()
        .params(vec![params!("Bob"), params!("Alice")])
        .apply("create_user_with", ScenarioFn::sync_with(create_user_with))
        .unwrap()
)]
#[case::macro_form(scenario!(create_user_with, [params!("Bob"), params!("Alice")]).unwrap())]
fn parameterized_shapes_are_equivalent(#[case] shaped: ScenarioDescriptor) {
    let reference = scenario()
        .params(vec![params!("Bob"), params!("Alice")])
        .apply("create_user_with", ScenarioFn::sync_with(create_user_with))
        .unwrap();
    assert_equivalent(&reference, &shaped);
}

#[rstest]
#[case::builder_form(
    scenario()
        .with(skip())
        .apply("update_user", ScenarioFn::async_fn(update_user))
        .unwrap()
)]
#[case::macro_form(scenario!([skip()] async update_user).unwrap())]
fn modifier_shapes_are_equivalent(#[case] shaped: ScenarioDescriptor) {
    let reference = scenario()
        .with(skip())
        .apply("update_user", ScenarioFn::async_fn(update_user))
        .unwrap();
    assert_equivalent(&reference, &shaped);
}

#[test]
fn builder_reuse_does_not_leak_configuration() {
    let base = scenario();
    let skipped = base.with(skip_because("pending rework"));
    let parameterized = base.params(vec![ParamSet::new(vec![katha::json!("Bob")])]);

    let plain = base.apply("create_user", ScenarioFn::sync(create_user)).unwrap();
    assert!(plain.decorators().is_empty());
    assert!(plain.params().is_empty());

    let with_mod = skipped
        .apply("create_user", ScenarioFn::sync(create_user))
        .unwrap();
    assert_eq!(with_mod.decorators().len(), 1);
    assert!(with_mod.params().is_empty());

    let with_params = parameterized
        .apply("create_user_with", ScenarioFn::sync_with(create_user_with))
        .unwrap();
    assert!(with_params.decorators().is_empty());
    assert_eq!(with_params.params().len(), 1);
}

#[test]
fn modifier_order_is_declaration_order() {
    let descriptor = scenario()
        .with(skip_because("first"))
        .with(skip_because("second"))
        .apply("create_user", ScenarioFn::sync(create_user))
        .unwrap();
    // Both are skip modifiers; the declared count and order survive.
    assert_eq!(descriptor.decorators().len(), 2);
}

#[rstest]
#[case("")]
#[case("create user")]
#[case("9lives")]
fn invalid_names_fail_fast(#[case] name: &str) {
    let err = scenario()
        .apply(name, ScenarioFn::sync(create_user))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn name_is_never_rederived() {
    let descriptor = ScenarioDescriptor::of("create_user", ScenarioFn::sync(create_user)).unwrap();
    let cloned = descriptor.clone();
    assert_eq!(cloned.name(), "create_user");
}

#[test]
fn arity_distinguishes_nullary_from_variadic() {
    assert_eq!(ScenarioFn::sync(create_user).arity(), Arity::Nullary);
    assert_eq!(
        ScenarioFn::sync_with(create_user_with).arity(),
        Arity::Variadic
    );
}
