use std::path::Path;

use tinytemplate::TinyTemplate;

use crate::Profit;

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/report_template.txt"
));
static TEMPLATE_NAME: &str = "flight";

#[derive(serde::Serialize)]
struct Context<'a> {
    uk_airport: &'a str,
    overseas_airport: &'a str,
    aircraft_type: &'a str,
    distance: i64,
    total_revenue: String,
    total_cost: String,
    profit_or_loss: String,
}

/// Formats `value` with the shortest decimal representation that round-trips,
/// e.g. `280000`, `257798.40000000002`, `-12.5`.
pub fn amount(value: f64) -> String {
    // `-0` reads as a loss of nothing
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

/// Renders [`Profit`]s into the text report
pub struct Renderer {
    tt: TinyTemplate<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, tinytemplate::error::Error> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tt })
    }

    /// Returns the block describing a single flight
    pub fn block(&self, profit: &Profit) -> Result<String, tinytemplate::error::Error> {
        let context = Context {
            uk_airport: &profit.flight.uk_airport,
            overseas_airport: &profit.flight.overseas_airport,
            aircraft_type: &profit.flight.aircraft_type,
            distance: profit.distance,
            total_revenue: amount(profit.total_revenue),
            total_cost: amount(profit.total_cost),
            profit_or_loss: amount(profit.profit_or_loss),
        };
        self.tt.render(TEMPLATE_NAME, &context)
    }

    /// Returns the report of all `results`, in order. Flights without a result are omitted.
    pub fn document<'a>(
        &self,
        results: impl IntoIterator<Item = Option<Profit<'a>>>,
    ) -> Result<String, tinytemplate::error::Error> {
        results
            .into_iter()
            .flatten()
            .map(|profit| self.block(&profit))
            .collect()
    }
}

/// Removes the report at `path`, if any.
pub fn remove_report(path: &Path) -> std::io::Result<()> {
    if path.try_exists()? {
        log::debug!("{} - removing previous report", path.display());
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Writes `report` to `path`, removing any previous file first.
/// # Implementation
/// This function is idempotent.
pub fn write_report(path: &Path, report: &str) -> std::io::Result<()> {
    remove_report(path)?;
    std::fs::write(path, report)
}
