use std::io::{self, Write};

pub const HEADER: &str = "🔍 Recommendations:";

/// Fixed guidance, printed regardless of the computed values.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Improve replenishment for SKUs with high OOS rate.",
    "Reduce stock for bottom-performing SKUs to cut holding cost.",
    "Prioritize categories with high conversion but low visibility.",
    "Investigate stores with persistent shrink values.",
];

pub fn write_recommendations<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{HEADER}")?;
    for line in RECOMMENDATIONS {
        writeln!(out, "- {line}")?;
    }
    Ok(())
}
