//! Loading and expanding parameterized scenarios.

mod common;

use common::{load_units, module, run};
use katha::{
    ensure, json, params, scenario, skip, Args, RunOutcome, ScenarioDescriptor, ScenarioFn,
    StepResult,
};
use rstest::rstest;

fn username(args: &Args) -> String {
    args.get(0)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string()
}

fn create_user(args: &Args) -> StepResult {
    ensure!(!username(args).is_empty());
    Ok(())
}

async fn update_user(args: Args) -> StepResult {
    ensure!(!username(&args).is_empty());
    Ok(())
}

fn create_bob(args: &Args) -> StepResult {
    let name = username(args);
    ensure!(name == "Bob", "unexpected username: {name}");
    Ok(())
}

async fn update_bob(args: Args) -> StepResult {
    let name = username(&args);
    ensure!(name == "Bob", "unexpected username: {name}");
    Ok(())
}

#[test]
fn load_parameterized_scenario() {
    let units = load_units(
        module()
            .bind(
                "create_user",
                scenario!(create_user, [params!("Bob"), params!("Alice")]).unwrap(),
            )
            .unwrap(),
    );

    assert_eq!(units.len(), 2);
    for (idx, unit) in units.iter().enumerate() {
        assert_eq!(
            unit.name(),
            format!("Scenario_create_user_{}_VedroScenario", idx + 1)
        );
        assert_eq!(unit.subject, "create user");
    }
    assert_eq!(units[0].args().get(0), Some(&json!("Bob")));
    assert_eq!(units[1].args().get(0), Some(&json!("Alice")));
}

#[test]
fn load_parameterized_scenarios() {
    let units = load_units(
        module()
            .bind(
                "create_user",
                scenario!(create_user, [params!("Bob"), params!("Alice")]).unwrap(),
            )
            .unwrap()
            .bind(
                "update_user",
                scenario!(async update_user, [params!("Bob"), params!("Alice")]).unwrap(),
            )
            .unwrap(),
    );

    assert_eq!(units.len(), 4);
    for (idx, unit) in units[..2].iter().enumerate() {
        assert_eq!(
            unit.name(),
            format!("Scenario_create_user_{}_VedroScenario", idx + 1)
        );
        assert_eq!(unit.subject, "create user");
    }
    for (idx, unit) in units[2..].iter().enumerate() {
        assert_eq!(
            unit.name(),
            format!("Scenario_update_user_{}_VedroScenario", idx + 1)
        );
        assert_eq!(unit.subject, "update user");
    }
}

#[rstest]
#[case::sync(scenario!(create_user, [params!("Bob"), params!("Alice")]).unwrap())]
#[case::asynchronous(scenario!(async update_user, [params!("Bob"), params!("Alice")]).unwrap())]
fn run_passed_parameterized_scenario(#[case] descriptor: ScenarioDescriptor) {
    let units = load_units(module().bind("scn", descriptor).unwrap());
    let report = run(&units);
    assert_eq!(report.total(), 2);
    assert_eq!(report.passed(), 2);
}

#[rstest]
#[case::sync(scenario!(create_bob, [params!("Bob"), params!("Alice")]).unwrap())]
#[case::asynchronous(scenario!(async update_bob, [params!("Bob"), params!("Alice")]).unwrap())]
fn run_failed_parameterized_scenario(#[case] descriptor: ScenarioDescriptor) {
    let units = load_units(module().bind("scn", descriptor).unwrap());
    let report = run(&units);
    assert_eq!(report.total(), 2);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 1);

    // The first set binds "Bob" and passes; the second binds "Alice".
    assert_eq!(report.results[0].outcome, RunOutcome::Passed);
    match &report.results[1].outcome {
        RunOutcome::Failed { error } => assert!(error.contains("Alice")),
        other => panic!("expected failure for Alice, got {other:?}"),
    }
}

#[rstest]
#[case::sync(scenario!([skip()] create_user, [params!("Bob"), params!("Alice")]).unwrap())]
#[case::asynchronous(
    scenario!([skip()] async update_user, [params!("Bob"), params!("Alice")]).unwrap()
)]
fn run_skipped_parameterized_scenario(#[case] descriptor: ScenarioDescriptor) {
    let units = load_units(module().bind("scn", descriptor).unwrap());
    let report = run(&units);
    assert_eq!(report.total(), 2);
    assert_eq!(report.skipped(), 2);
}

#[test]
fn run_partially_skipped_parameterized_scenario() {
    let units = load_units(
        module()
            .bind(
                "create_user",
                scenario!(
                    create_user,
                    [params!("Bob").with(skip()), params!("Alice")]
                )
                .unwrap(),
            )
            .unwrap(),
    );

    assert!(units[0].is_skipped());
    assert!(!units[1].is_skipped());

    let report = run(&units);
    assert_eq!(report.total(), 2);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.skipped(), 1);
    assert!(matches!(
        report.results[0].outcome,
        RunOutcome::Skipped { .. }
    ));
    assert_eq!(report.results[1].outcome, RunOutcome::Passed);
}

#[test]
fn parameter_sets_cannot_bind_to_nullary_functions() {
    fn takes_nothing() -> StepResult {
        Ok(())
    }

    // Expansion of the ill-formed descriptor fails; the sibling still loads.
    let units = load_units(
        module()
            .bind(
                "ill_formed",
                scenario()
                    .params(vec![params!("Bob")])
                    .apply("ill_formed", ScenarioFn::sync(takes_nothing))
                    .unwrap(),
            )
            .unwrap()
            .bind(
                "create_user",
                scenario!(create_user, [params!("Bob")]).unwrap(),
            )
            .unwrap(),
    );

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name(), "Scenario_create_user_1_VedroScenario");
}

#[test]
fn each_unit_owns_its_arguments() {
    let units = load_units(
        module()
            .bind(
                "create_user",
                scenario!(
                    create_user,
                    [params!("Bob").named("role", json!("admin")), params!("Alice")]
                )
                .unwrap(),
            )
            .unwrap(),
    );

    assert_eq!(units[0].args().named("role"), Some(&json!("admin")));
    assert_eq!(units[1].args().named("role"), None);
}

#[test]
fn subject_never_carries_the_index_suffix() {
    let units = load_units(
        module()
            .bind(
                "create_admin_user",
                scenario()
                    .params(vec![params!("Bob"), params!("Alice")])
                    .apply("create_admin_user", ScenarioFn::sync_with(create_user))
                    .unwrap(),
            )
            .unwrap(),
    );
    for unit in &units {
        assert_eq!(unit.subject, "create admin user");
        assert!(!unit.subject.contains("VedroScenario"));
    }
}
