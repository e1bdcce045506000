//! Output formatting for extracted records.

use pricelist_core::ExtractedItem;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array, as returned by the request boundary
    Json,
    /// CSV with a header row
    Csv,
    /// Aligned plain-text table
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_items(items: &[ExtractedItem], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(items)?),
        OutputFormat::Csv => format_csv(items),
        OutputFormat::Text => Ok(format_text(items)),
    }
}

fn format_csv(items: &[ExtractedItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["item", "unit", "mrp", "make"])?;

    for item in items {
        wtr.write_record([
            item.item.as_str(),
            item.unit.as_str(),
            &item.mrp.normalize().to_string(),
            item.make.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(items: &[ExtractedItem]) -> String {
    if items.is_empty() {
        return "No price-list records found.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.item.chars().count())
        .max()
        .unwrap_or(0)
        .max("Item".len());
    let unit_width = items
        .iter()
        .map(|i| i.unit.chars().count())
        .max()
        .unwrap_or(0)
        .max("Unit".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<unit_width$}  {:>10}  Make\n",
        "Item", "Unit", "MRP"
    ));

    for item in items {
        output.push_str(&format!(
            "{:<name_width$}  {:<unit_width$}  {:>10}  {}\n",
            item.item,
            item.unit,
            item.mrp.normalize().to_string(),
            item.make.as_deref().unwrap_or("-")
        ));
    }

    output.push_str(&format!("\n{} records\n", items.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pricelist_core::rust_decimal::Decimal;

    fn sample() -> Vec<ExtractedItem> {
        vec![
            ExtractedItem::new("Sodium Chloride AR", "500 gm", Decimal::new(125000, 2)).with_make("CDH"),
            ExtractedItem::new("Potassium Nitrate, AR", "1 kg", Decimal::from(980)),
        ]
    }

    #[test]
    fn test_format_csv() {
        let csv = format_items(&sample(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "item,unit,mrp,make\n\
             Sodium Chloride AR,500 gm,1250,CDH\n\
             \"Potassium Nitrate, AR\",1 kg,980,\n"
        );
    }

    #[test]
    fn test_format_json() {
        let json = format_items(&sample(), OutputFormat::Json).unwrap();
        assert!(json.starts_with(r#"[{"item":"Sodium Chloride AR","unit":"500 gm","mrp":1250,"make":"CDH"}"#));
    }

    #[test]
    fn test_format_text() {
        let text = format_items(&sample(), OutputFormat::Text).unwrap();
        assert!(text.contains("Sodium Chloride AR"));
        assert!(text.ends_with("2 records\n"));
        assert_eq!(format_items(&[], OutputFormat::Text).unwrap(), "No price-list records found.\n");
    }
}
