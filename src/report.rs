//! Plain-text rendering of a computation.

use std::fmt;

use crate::engine::{Breakdown, ComputeResult, Kpis};

impl fmt::Display for Kpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KPIS:")?;
        writeln!(f, "  Gross revenue        ${:>14.2}", self.gross_revenue)?;
        writeln!(f, "  Total cost           ${:>14.2}", self.total_cost)?;
        writeln!(f, "  Net margin           ${:>14.2}", self.net_margin)?;
        writeln!(f, "  Net margin %          {:>14.2}%", self.net_margin_pct * 100.0)?;
        writeln!(f, "  Net margin / MT      ${:>14.2}", self.net_margin_per_mt)?;
        writeln!(f, "  Break-even sell / MT ${:>14.2}", self.break_even_sell_per_mt)
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.route_legs.is_empty() {
            let legs: Vec<String> = self
                .route_legs
                .iter()
                .map(|(from, to)| format!("{from} -> {to}"))
                .collect();
            writeln!(f, "ROUTE: {}", legs.join(", "))?;
        }

        writeln!(f, "BREAKDOWN:")?;
        writeln!(f, "  COGS                 ${:>14.2}", self.cogs)?;
        writeln!(f, "  Logistics            ${:>14.2}", self.logistics_excl_cogs_ins)?;
        writeln!(f, "  Insurance            ${:>14.2}", self.insurance)?;
        writeln!(f, "  Shrinkage            ${:>14.2}", self.shrinkage)?;
        writeln!(f, "  Finance              ${:>14.2}", self.finance)?;
        writeln!(f, "  Partner profit       ${:>14.2}", self.partner_profit)?;

        if self.lines.is_empty() {
            return Ok(());
        }
        writeln!(f, "LINES:")?;
        for line in &self.lines {
            writeln!(
                f,
                "  {:<28} {:<10} {:>10.2} {:<10} x {:>10.4} = ${:>12.2}",
                line.code,
                line.category,
                line.quantity,
                line.unit,
                line.unit_amount_usd,
                line.cost_usd
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ComputeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "UNITS: {} containers, {} trucks",
            self.units.containers, self.units.trucks
        )?;
        write!(f, "{}", self.kpis)?;
        write!(f, "{}", self.breakdown)?;
        if !self.breakdown.lines.is_empty() {
            writeln!(f, "  Lines total          ${:>14.2}", self.lines_total())?;
        }
        Ok(())
    }
}
