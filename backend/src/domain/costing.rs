//! Recipe cost calculation engine.
//!
//! The single authoritative pipeline from ingredient quantities, labor inputs,
//! an hourly rate, a batch size and a markup percentage to a complete cost and
//! price breakdown. Pure: no storage access, no hidden state, and calling it
//! twice on identical inputs yields identical outputs. Callers resolve
//! ingredient costs first and persist the result afterwards; both create and
//! update paths (and bulk import) run through this same function.
//!
//! Rounding rules: line and stage subtotals are carried at 4 decimal places,
//! the five output figures are rounded to exactly 2 decimal places, half-up,
//! once, at finalization. The selling price is derived from the already
//! rounded cost per pie, so the price a customer sees is always the displayed
//! per-pie cost times the markup.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::errors::DomainError;
use crate::domain::models::recipe::LaborInput;

/// Decimal places carried by intermediate subtotals.
const SUBTOTAL_DP: u32 = 4;
/// Decimal places of every stored monetary figure.
const MONEY_DP: u32 = 2;

/// A recipe ingredient line with its catalog cost already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredientLine {
    pub ingredient_id: String,
    pub quantity: Decimal,
    pub cost_per_unit: Decimal,
}

/// Everything the calculator needs, fully resolved and validated upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CostingInput {
    pub ingredients: Vec<ResolvedIngredientLine>,
    pub labor_inputs: Vec<LaborInput>,
    pub labor_hourly_rate: Decimal,
    pub batch_size: u32,
    pub markup_percentage: Decimal,
}

/// The complete breakdown, every figure rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub total_ingredient_cost: Decimal,
    pub total_labor_cost: Decimal,
    pub total_batch_cost: Decimal,
    pub cost_per_pie: Decimal,
    pub selling_price: Decimal,
}

/// Round a stored monetary figure to 2 decimal places, half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

fn round_subtotal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SUBTOTAL_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Itemized labor costing: sum of workers x hours-per-worker across all
/// entries, priced at the recipe-level hourly rate. Subtotal precision.
pub fn itemized_labor_cost(labor_inputs: &[LaborInput], hourly_rate: Decimal) -> Decimal {
    let total_hours: Decimal = labor_inputs
        .iter()
        .map(|input| Decimal::from(input.workers) * input.hours_per_worker)
        .sum();
    round_subtotal(total_hours * hourly_rate)
}

/// Per-product labor costing: hourly rate x minutes / 60, rounded to 2
/// decimal places. Negative inputs clamp the result to zero; a negative
/// labor cost must never reach downstream pricing.
pub fn per_pie_labor_cost(cost_per_hour: Decimal, minutes_per_pie: Decimal) -> Decimal {
    if cost_per_hour < Decimal::ZERO || minutes_per_pie < Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(cost_per_hour * minutes_per_pie / Decimal::from(60))
}

/// Run the full costing pipeline.
///
/// Fails without producing any partial figures if a resolved ingredient cost
/// is negative. A zero batch size yields a zero cost per pie rather than an
/// error; entry-boundary validation keeps that branch out of normal use.
pub fn calculate(input: &CostingInput) -> Result<CostBreakdown, DomainError> {
    let mut ingredient_total = Decimal::ZERO;
    for line in &input.ingredients {
        if line.cost_per_unit < Decimal::ZERO {
            return Err(DomainError::InvalidIngredientCost {
                id: line.ingredient_id.clone(),
            });
        }
        ingredient_total += line.quantity * line.cost_per_unit;
    }
    let ingredient_total = round_subtotal(ingredient_total);

    let labor_total = itemized_labor_cost(&input.labor_inputs, input.labor_hourly_rate);
    let batch_total = ingredient_total + labor_total;

    let cost_per_pie = if input.batch_size == 0 {
        Decimal::ZERO
    } else {
        round_money(batch_total / Decimal::from(input.batch_size))
    };

    let markup_multiplier = Decimal::ONE + input.markup_percentage / Decimal::ONE_HUNDRED;
    let selling_price = round_money(cost_per_pie * markup_multiplier);

    debug!(
        "Costed batch: ingredients={}, labor={}, batch={}, per_pie={}, selling={}",
        ingredient_total, labor_total, batch_total, cost_per_pie, selling_price
    );

    Ok(CostBreakdown {
        total_ingredient_cost: round_money(ingredient_total),
        total_labor_cost: round_money(labor_total),
        total_batch_cost: round_money(batch_total),
        cost_per_pie,
        selling_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(id: &str, quantity: Decimal, cost_per_unit: Decimal) -> ResolvedIngredientLine {
        ResolvedIngredientLine {
            ingredient_id: id.to_string(),
            quantity,
            cost_per_unit,
        }
    }

    /// 2kg flour @ 1.50/kg, 1 worker x 2.5h @ 25/h, batch of 10, 10% markup.
    fn baseline_input() -> CostingInput {
        CostingInput {
            ingredients: vec![line("flour", dec!(2), dec!(1.50))],
            labor_inputs: vec![LaborInput {
                workers: 1,
                hours_per_worker: dec!(2.5),
            }],
            labor_hourly_rate: dec!(25),
            batch_size: 10,
            markup_percentage: dec!(10),
        }
    }

    #[test]
    fn baseline_breakdown_rounds_half_up() {
        let breakdown = calculate(&baseline_input()).unwrap();

        assert_eq!(breakdown.total_ingredient_cost, dec!(3.00));
        assert_eq!(breakdown.total_labor_cost, dec!(62.50));
        assert_eq!(breakdown.total_batch_cost, dec!(65.50));
        assert_eq!(breakdown.cost_per_pie, dec!(6.55));
        // 6.55 * 1.10 = 7.205; half-up takes it to 7.21, not 7.20
        assert_eq!(breakdown.selling_price, dec!(7.21));
    }

    #[test]
    fn twenty_percent_markup() {
        let mut input = baseline_input();
        input.markup_percentage = dec!(20);

        let breakdown = calculate(&input).unwrap();
        assert_eq!(breakdown.selling_price, dec!(7.86));
    }

    #[test]
    fn doubled_batch_size_halves_cost_per_pie() {
        let mut input = baseline_input();
        input.batch_size = 20;

        let breakdown = calculate(&input).unwrap();
        // 65.50 / 20 = 3.275, half-up to 3.28
        assert_eq!(breakdown.cost_per_pie, dec!(3.28));
        // 3.28 * 1.10 = 3.608, half-up to 3.61
        assert_eq!(breakdown.selling_price, dec!(3.61));
    }

    #[test]
    fn labor_change_flows_through_whole_breakdown() {
        let mut input = baseline_input();
        input.labor_inputs = vec![LaborInput {
            workers: 2,
            hours_per_worker: dec!(1.5),
        }];
        input.labor_hourly_rate = dec!(30);

        let breakdown = calculate(&input).unwrap();
        assert_eq!(breakdown.total_labor_cost, dec!(90.00));
        assert_eq!(breakdown.total_batch_cost, dec!(93.00));
        assert_eq!(breakdown.cost_per_pie, dec!(9.30));
        assert_eq!(breakdown.selling_price, dec!(10.23));
    }

    #[test]
    fn calculation_is_idempotent() {
        let input = baseline_input();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ingredient_cost_is_linear_over_lines() {
        let input = CostingInput {
            ingredients: vec![
                line("flour", dec!(2), dec!(1.50)),
                line("butter", dec!(0.5), dec!(8.40)),
                line("salt", dec!(0.01), dec!(12.00)),
            ],
            labor_inputs: vec![LaborInput {
                workers: 1,
                hours_per_worker: dec!(0),
            }],
            labor_hourly_rate: dec!(0),
            batch_size: 1,
            markup_percentage: dec!(0),
        };

        let breakdown = calculate(&input).unwrap();
        // 3.00 + 4.20 + 0.12
        assert_eq!(breakdown.total_ingredient_cost, dec!(7.32));
        assert_eq!(breakdown.total_batch_cost, dec!(7.32));
    }

    #[test]
    fn selling_price_strictly_increases_with_markup() {
        let mut previous = Decimal::MIN;
        for markup in [dec!(0), dec!(5), dec!(10), dec!(25), dec!(100)] {
            let mut input = baseline_input();
            input.markup_percentage = markup;
            let breakdown = calculate(&input).unwrap();
            assert!(
                breakdown.selling_price > previous,
                "markup {} did not raise the price",
                markup
            );
            previous = breakdown.selling_price;
        }
    }

    #[test]
    fn zero_batch_size_yields_zero_cost_per_pie() {
        let mut input = baseline_input();
        input.batch_size = 0;

        let breakdown = calculate(&input).unwrap();
        assert_eq!(breakdown.cost_per_pie, dec!(0.00));
        assert_eq!(breakdown.selling_price, dec!(0.00));
        // batch totals are still reported
        assert_eq!(breakdown.total_batch_cost, dec!(65.50));
    }

    #[test]
    fn negative_resolved_cost_fails_whole_calculation() {
        let mut input = baseline_input();
        input
            .ingredients
            .push(line("mystery", dec!(1), dec!(-0.01)));

        let err = calculate(&input).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidIngredientCost {
                id: "mystery".to_string()
            }
        );
    }

    #[test]
    fn subtotals_round_at_four_places_before_final_rounding() {
        // Three lines of 0.33335 each: kept at 4 dp the stage subtotal is
        // 1.0001 (not 1.0002 from per-line 2 dp rounding compounding).
        let input = CostingInput {
            ingredients: vec![
                line("a", dec!(1), dec!(0.33335)),
                line("b", dec!(1), dec!(0.33335)),
                line("c", dec!(1), dec!(0.33335)),
            ],
            labor_inputs: vec![LaborInput {
                workers: 1,
                hours_per_worker: dec!(0),
            }],
            labor_hourly_rate: dec!(0),
            batch_size: 1,
            markup_percentage: dec!(0),
        };

        let breakdown = calculate(&input).unwrap();
        assert_eq!(breakdown.total_ingredient_cost, dec!(1.00));
        assert_eq!(breakdown.cost_per_pie, dec!(1.00));
    }

    #[test]
    fn per_pie_labor_cost_matches_rate_times_minutes() {
        assert_eq!(per_pie_labor_cost(dec!(25), dec!(30)), dec!(12.50));
        assert_eq!(per_pie_labor_cost(dec!(30), dec!(45)), dec!(22.50));
    }

    #[test]
    fn per_pie_labor_cost_clamps_negative_inputs_to_zero() {
        assert_eq!(per_pie_labor_cost(dec!(-25), dec!(30)), Decimal::ZERO);
        assert_eq!(per_pie_labor_cost(dec!(25), dec!(-30)), Decimal::ZERO);
    }

    #[test]
    fn itemized_labor_sums_across_entries() {
        let inputs = vec![
            LaborInput {
                workers: 2,
                hours_per_worker: dec!(1.5),
            },
            LaborInput {
                workers: 1,
                hours_per_worker: dec!(0.5),
            },
        ];
        // (2 * 1.5 + 1 * 0.5) * 20 = 70
        assert_eq!(itemized_labor_cost(&inputs, dec!(20)), dec!(70.0000));
    }
}
