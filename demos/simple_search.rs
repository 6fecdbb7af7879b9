mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let term = std::env::var("YELP_TERM").unwrap_or_default();
    let location = common::required_env("YELP_LOCATION")?;

    let result = client.search_simple(&term, &location).await?;

    println!("total: {}", result.total);
    for business in &result.businesses {
        println!(
            "{} ({}) rating {} from {} reviews, {}",
            business.name,
            business.id,
            business.rating,
            business.review_count,
            business.location.display_address.join(", ")
        );
    }

    Ok(())
}
