mod common;

use yelp_fusion::{BusinessId, YelpError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let id = BusinessId::new(common::required_env("YELP_BUSINESS_ID")?)?;

    let detail = match client.business(&id).await {
        Ok(detail) => detail,
        Err(YelpError::NotFound { id, .. }) => {
            println!("no business with id {id}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "{} claimed: {}, closed: {}, phone: {}",
        detail.business.name, detail.is_claimed, detail.business.is_closed, detail.business.phone
    );
    if let Some(hours) = detail.regular_hours() {
        println!("open now: {}", hours.is_open_now);
        for open in &hours.open {
            println!(
                "  {:?}: {}-{}{}",
                open.weekday(),
                open.start,
                open.end,
                if open.is_overnight { " (overnight)" } else { "" }
            );
        }
    }

    Ok(())
}
