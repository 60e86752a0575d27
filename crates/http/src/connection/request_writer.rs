use crate::codec::RequestHeadEncoder;
use crate::protocol::{RequestHead, SendError};
use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::codec::Encoder;

/// Buffers encoded request heads and flushes them to a transport.
#[derive(Debug)]
pub struct RequestWriter<W> {
    writer: W,
    buffer: BytesMut,
    encoder: RequestHeadEncoder,
}

impl<W> RequestWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn with_capacity(writer: W, buffer_size: usize) -> Self {
        Self { writer, buffer: BytesMut::with_capacity(buffer_size), encoder: RequestHeadEncoder }
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn clear_buf(&mut self) {
        self.buffer.clear();
    }

    /// Encodes `head` into the buffer. Nothing reaches the transport until [`flush`](Self::flush).
    #[inline]
    pub fn write(&mut self, head: &RequestHead) -> Result<(), SendError> {
        self.encoder.encode(head, &mut self.buffer)
    }

    #[inline]
    pub async fn flush(&mut self) -> Result<(), SendError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        self.writer.write_all(self.buffer.as_ref()).await?;
        self.buffer.clear();
        Ok(self.writer.flush().await?)
    }
}
