mod common;

use yelp_fusion::{CoordinateOptions, SearchOptions, SortBy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let latitude: f64 = common::required_env("YELP_LATITUDE")?.parse()?;
    let longitude: f64 = common::required_env("YELP_LONGITUDE")?.parse()?;

    let mut options =
        SearchOptions::new(CoordinateOptions::new(latitude, longitude)).sort_by(SortBy::Distance);
    if let Ok(term) = std::env::var("YELP_TERM") {
        options = options.term(term);
    }

    let result = client.search(&options).await?;

    println!(
        "region center: {}, {}; total: {}",
        result.region.center.latitude, result.region.center.longitude, result.total
    );
    for business in &result.businesses {
        println!(
            "{:>8.0} m  {} {}",
            business.distance.unwrap_or_default(),
            business.name,
            business.price
        );
    }

    Ok(())
}
