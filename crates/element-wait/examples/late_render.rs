// Late render example
//
// Simulates a client-side rendered page where the "Submit" button shows up
// a second after load and "Save" stays disabled. Run with:
//   RUST_LOG=element_wait=trace cargo run --example late_render

use async_trait::async_trait;
use element_wait::{ElementHandle, Locator, Page, PollPolicy, Result, click, wait};
use std::time::Duration;
use tokio::time::Instant;

struct Button(String);

#[async_trait]
impl ElementHandle for Button {
    async fn click(&self) -> Result<()> {
        println!("clicked {}", self.0);
        Ok(())
    }
}

struct LateRenderPage {
    loaded_at: Instant,
}

#[async_trait]
impl Page for LateRenderPage {
    type Element = Button;

    async fn find_first(&self, locator: &Locator) -> Result<Option<Button>> {
        let rendered = self.loaded_at.elapsed() >= Duration::from_secs(1);
        let found = match locator.selector().as_str() {
            "//button[contains(., 'Submit')]" if rendered => Some(Button("Submit".into())),
            _ => None,
        };
        Ok(found)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let page = LateRenderPage {
        loaded_at: Instant::now(),
    };

    click::element_with_text(&page, "button", "Submit").await?;

    let quick = PollPolicy::builder().max_attempts(3).interval_ms(100).build();
    match wait::for_enabled_state_xpath_with_policy(&page, "button", "Save", &quick).await? {
        Some(save) => save.click().await?,
        None => println!("Save never became enabled"),
    }

    Ok(())
}
