//! In-memory sink for tests and native rendering.

use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Sink;

/// A `Sink<Vec<u8>>` that appends every chunk to an in-memory buffer.
///
/// Used where no HTTP response body exists: unit tests and the native
/// render-to-string path.
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Vec<u8>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes received so far.
    pub fn contents(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the sink, returning the buffered bytes as a string.
    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl Sink<Vec<u8>> for BufferSink {
    type Error = Infallible;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: Vec<u8>) -> Result<(), Self::Error> {
        self.get_mut().buf.extend_from_slice(&item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::SinkExt;

    #[test]
    fn test_buffer_accumulates_chunks() {
        block_on(async {
            let mut sink = BufferSink::new();
            sink.send(b"<html>".to_vec()).await.unwrap();
            sink.send(b"</html>".to_vec()).await.unwrap();

            assert_eq!(sink.into_string(), "<html></html>");
        });
    }
}
