//! Pick a filter by its tag name and run a filtered report.
//!
//! Run with:
//!   cargo run --example 02_filtered_report -- <property-id> string_filter pagePath /Page/1
//!   cargo run --example 02_filtered_report -- <property-id> in_list_filter pagePath /Page/1,/Page/2
//!   cargo run --example 02_filtered_report -- <property-id> numeric_filter sessionEngaged ">=" 1
//!   cargo run --example 02_filtered_report -- <property-id> between_filter sessionEngaged 5 10

use ga4_report::{Filter, FilterKind, GaClient, MatchType, NumericValue, Operation, ReportBuilder};

fn nth(rest: &[String], i: usize, kind: FilterKind) -> Result<&str, String> {
    rest.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{kind} needs more arguments"))
}

fn build_filter(
    kind: FilterKind,
    field: &str,
    rest: &[String],
) -> Result<Filter, Box<dyn std::error::Error>> {
    let arg = |i: usize| nth(rest, i, kind);
    Ok(match kind {
        FilterKind::StringFilter => Filter::string_match(field, arg(0)?, MatchType::Exact, true),
        FilterKind::InListFilter => Filter::in_list(field, arg(0)?.split(','), false),
        FilterKind::NumericFilter => Filter::numeric(
            field,
            arg(0)?.parse::<Operation>()?,
            arg(1)?.parse::<NumericValue>()?,
        ),
        FilterKind::BetweenFilter => Filter::between(
            field,
            arg(0)?.parse::<NumericValue>()?,
            arg(1)?.parse::<NumericValue>()?,
        ),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [property, kind, field, rest @ ..] = args.as_slice() else {
        return Err("usage: 02_filtered_report <property-id> <filter-kind> <field> <values...>".into());
    };

    // unknown tags fail here, before anything is sent
    let kind: FilterKind = kind.parse()?;
    let filter = build_filter(kind, field, rest)?;

    let client = GaClient::default();
    let table = ReportBuilder::new(&client, property.as_str())
        .dimensions(["pagePath"])
        .metrics(["screenPageViews", "activeUsers"])
        .date_range("28daysAgo", "yesterday")
        .filter(filter)
        .fetch()
        .await?;

    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
