//! Line-oriented console I/O for the kiosk front end.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::base::types::Res;

/// Minimal prompt/read helper over an async line source.
///
/// Generic over the reader so the step handlers can be driven by scripted
/// input in tests; production uses stdin.
pub struct Console<R = BufReader<Stdin>> {
    reader: R,
}

impl Console<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl<R> Console<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print one line of kiosk copy.
    pub fn say(&self, text: &str) {
        println!("{text}");
    }

    /// Read one trimmed line. Errors when the input stream closes, which
    /// ends the kiosk session loop.
    pub async fn read_line(&mut self) -> Res<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;

        if read == 0 {
            return Err(anyhow::anyhow!("console input closed"));
        }

        Ok(line.trim().to_string())
    }

    /// Print a prompt and read the reply.
    pub async fn prompt(&mut self, text: &str) -> Res<String> {
        self.say(text);
        self.read_line().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_trimmed_lines_until_eof() {
        let mut console = Console::new(&b"  1 \nback\n"[..]);

        assert_eq!(console.read_line().await.unwrap(), "1");
        assert_eq!(console.read_line().await.unwrap(), "back");
        assert!(console.read_line().await.is_err());
    }
}
