//! Edge-case tests: degenerate scenarios and cost tables.

use landed_cost::{
    compute, default_cost_items, Behavior, Category, CostItem, CostRepository,
    InMemoryCostRepository, Scenario,
};

fn fixed(code: &str, amount: f64, scope: &str, category: Category) -> CostItem {
    CostItem {
        code: code.into(),
        name: code.into(),
        behavior: Behavior::FixedPerShipment,
        unit_amount_usd: amount,
        unit: "shipment".into(),
        qty_source: "1".into(),
        dest_scope: scope.into(),
        category,
    }
}

// ============================================================================
// Zero volume / zero revenue
// ============================================================================

#[test]
fn zero_volume_has_no_units_and_no_ratios() {
    let r = compute(&Scenario::new("LUB", 0.0, 380.0), &default_cost_items());
    assert_eq!(r.units.containers, 0);
    assert_eq!(r.units.trucks, 0);
    assert_eq!(r.kpis.net_margin_pct, 0.0);
    assert_eq!(r.kpis.net_margin_per_mt, 0.0);
    assert_eq!(r.kpis.break_even_sell_per_mt, 0.0);
    // the fixed inspection fee is still charged
    assert_eq!(r.line("INSP_BIVAC").unwrap().cost_usd, 2_500.0);
    assert!(r.kpis.net_margin < 0.0);
}

#[test]
fn zero_prices_give_zero_revenue_without_fault() {
    let r = compute(&Scenario::new("KIN", 100.0, 0.0), &default_cost_items());
    assert_eq!(r.kpis.gross_revenue, 0.0);
    assert_eq!(r.kpis.net_margin_pct, 0.0);
    assert!(r.kpis.net_margin_per_mt.is_finite());
}

// ============================================================================
// Misconfigured capacities
// ============================================================================

#[test]
fn zero_capacity_is_floored_not_divided_by() {
    let s = Scenario {
        mt_per_container: 0.0,
        mt_per_truck: 0.0,
        ..Scenario::new("LUB", 1.0, 380.0)
    };
    let r = compute(&s, &default_cost_items());
    assert_eq!(r.units.containers, 10_000);
    assert_eq!(r.units.trucks, 10_000);
    assert!(r.kpis.total_cost.is_finite());
}

// ============================================================================
// Finance fallback
// ============================================================================

#[test]
fn nan_finance_rate_does_not_poison_totals() {
    let s = Scenario {
        annual_finance_rate_pct: f64::NAN,
        dso_sell_days: 30,
        ..Scenario::new("LUB", 100.0, 380.0)
    };
    let r = compute(&s, &default_cost_items());
    assert_eq!(r.breakdown.finance, 0.0);
    assert!(r.kpis.total_cost.is_finite());
    assert!(r.kpis.net_margin.is_finite());
}

// ============================================================================
// Cost tables
// ============================================================================

#[test]
fn empty_cost_table() {
    let r = compute(&Scenario::new("LUB", 10.0, 100.0), &[]);
    assert!(r.breakdown.lines.is_empty());
    assert_eq!(r.breakdown.logistics_excl_cogs_ins, 0.0);
    assert_eq!(r.breakdown.insurance, 0.0);
}

#[test]
fn unknown_destination_matches_nothing() {
    let r = compute(&Scenario::new("NDO", 10.0, 100.0), &default_cost_items());
    assert!(r.breakdown.lines.is_empty());
    assert!(r.breakdown.route_legs.is_empty());
}

#[test]
fn global_star_scope_is_not_a_wildcard() {
    let items = [fixed("ALL", 100.0, "*", Category::Logistics)];
    let r = compute(&Scenario::new("LUB", 10.0, 100.0), &items);
    assert!(r.line("ALL").is_none());
}

#[test]
fn bare_destination_scope_matches() {
    let items = [fixed("BARE", 100.0, "LUB", Category::Logistics)];
    let r = compute(&Scenario::new("LUB", 10.0, 100.0), &items);
    assert_eq!(r.line("BARE").unwrap().cost_usd, 100.0);
}

#[test]
fn negative_unit_amount_is_a_credit() {
    let items = [fixed("REBATE", -500.0, "LUB*", Category::Logistics)];
    let r = compute(&Scenario::new("LUB", 10.0, 100.0), &items);
    assert_eq!(r.breakdown.logistics_excl_cogs_ins, -500.0);
}

#[test]
fn duplicate_lines_are_both_counted() {
    // a raw slice is not a repository; uniqueness is the repository's job
    let items = [
        fixed("DUP", 10.0, "LUB*", Category::Logistics),
        fixed("DUP", 10.0, "LUB*", Category::Logistics),
    ];
    let r = compute(&Scenario::new("LUB", 10.0, 100.0), &items);
    assert_eq!(r.breakdown.lines.len(), 2);
    assert_eq!(r.breakdown.logistics_excl_cogs_ins, 20.0);
}

#[test]
fn repository_mutation_changes_next_computation_only() {
    let repo = InMemoryCostRepository::seeded();
    let s = Scenario::new("LUB", 100.0, 380.0);

    let before = repo.compute(&s).unwrap();
    repo.add(fixed("LUB_PORT_SURCHARGE", 1_000.0, "LUB*", Category::Logistics))
        .unwrap();
    let after = repo.compute(&s).unwrap();

    assert!(before.line("LUB_PORT_SURCHARGE").is_none());
    assert_eq!(
        after.breakdown.logistics_excl_cogs_ins - before.breakdown.logistics_excl_cogs_ins,
        1_000.0
    );
}
