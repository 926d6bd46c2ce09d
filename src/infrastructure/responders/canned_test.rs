use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::Canned;
use super::SIMULATED_RESPONSE;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;

#[test]
fn it_reports_its_name() {
    assert_eq!(Canned::default().name(), ResponderName::Canned);
}

#[test]
fn it_parses_its_name() {
    assert_eq!(
        ResponderName::parse("canned").unwrap(),
        ResponderName::Canned
    );
    assert!(ResponderName::parse("parrot").is_err());
}

#[tokio::test]
async fn it_sends_a_tagged_completion() -> Result<()> {
    Config::set(ConfigKey::ResponseDelay, "0");
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    Canned::default()
        .generate(ResponderPrompt::new(3, "Hello"), &tx)
        .await?;

    match rx.recv().await.unwrap() {
        Event::CompletionResponse(res) => {
            assert_eq!(res.session_id, 3);
            assert_eq!(res.author, Author::Assistant);
            assert_eq!(res.text, SIMULATED_RESPONSE);
        }
        _ => bail!("Wrong event"),
    }

    return Ok(());
}
