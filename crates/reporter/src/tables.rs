use analytics::{SkuOosRate, SkuPerformance, StoreShrink};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

fn base_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn number(v: f64) -> Cell {
    Cell::new(format!("{v:.2}")).set_alignment(CellAlignment::Right)
}

pub fn sku_table(rows: &[SkuPerformance]) -> Table {
    let mut table = base_table(&[
        "SKU",
        "Units Sold",
        "Revenue",
        "Avg Inventory",
        "Avg Conversion",
        "Avg Stock Cover",
    ]);
    for p in rows {
        table.add_row(vec![
            Cell::new(&p.sku_id),
            number(p.units_sold),
            number(p.revenue),
            number(p.mean_inventory),
            Cell::new(format!("{:.4}", p.mean_conversion)).set_alignment(CellAlignment::Right),
            p.mean_stock_cover
                .map_or_else(|| Cell::new("-"), number)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn shrink_table(rows: &[StoreShrink]) -> Table {
    let mut table = base_table(&["Store", "Shrink"]);
    for s in rows {
        table.add_row(vec![Cell::new(&s.store), number(s.shrink)]);
    }
    table
}

pub fn oos_table(rows: &[SkuOosRate]) -> Table {
    let mut table = base_table(&["SKU", "OOS Rate"]);
    for r in rows {
        table.add_row(vec![
            Cell::new(&r.sku_id),
            Cell::new(format!("{:.1}%", r.oos_rate * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
