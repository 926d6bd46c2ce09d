use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;

static SENDER: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// Serializes clipboard writes onto one task so a single arboard handle
/// lives for the whole process.
pub struct ClipboardService {}

impl ClipboardService {
    pub fn healthcheck() -> Result<()> {
        if SENDER.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        SENDER
            .set(tx)
            .map_err(|_| return anyhow!("Clipboard service is already running."))?;
        let mut clipboard = arboard::Clipboard::new()?;

        loop {
            match rx.recv().await {
                Some(text) => clipboard.set_text(text)?,
                None => continue,
            }
        }
    }

    pub fn set(text: String) -> Result<()> {
        match SENDER.get() {
            Some(tx) => {
                tx.send(text)?;
                return Ok(());
            }
            None => return Err(anyhow!("Clipboard service is not running.")),
        }
    }
}
