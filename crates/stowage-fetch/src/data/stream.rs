use std::fmt;
use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use http::HeaderMap;
use http_body::{Body, Frame};
use http_body_util::{BodyStream as FrameStream, StreamBody};
use tokio::sync::oneshot;

/// A boxed, sendable stream.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// The raw backup bytes, read exactly once.
pub type BodyStream = BoxStream<'static, io::Result<Bytes>>;

/// Create the pair that links a body's end to its trailers.
pub fn trailer_channel() -> (TrailerSender, PendingTrailers) {
    let (tx, rx) = oneshot::channel();
    (TrailerSender(tx), PendingTrailers(rx))
}

/// Producer half: fired once, when the body reached its end.
#[derive(Debug)]
pub struct TrailerSender(oneshot::Sender<HeaderMap>);

impl TrailerSender {
    pub fn complete(self, trailers: HeaderMap) {
        // The receiver may be gone if nobody checks the outcome.
        let _ = self.0.send(trailers);
    }
}

/// Trailers of a [`BackupStream`] that are not known until its body ends.
#[derive(Debug)]
pub struct PendingTrailers(oneshot::Receiver<HeaderMap>);

impl PendingTrailers {
    /// The trailers delivered at the end of the body.
    ///
    /// `None` while the body is still being read, and forever when the body
    /// failed or was dropped before its end. A body without a trailer section
    /// resolves to an empty map.
    pub fn resolve(mut self) -> Option<HeaderMap> { self.0.try_recv().ok() }
}

/// A live backup: a single-pass body plus its pending trailers.
pub struct BackupStream {
    body:     BodyStream,
    trailers: PendingTrailers,
}

impl fmt::Debug for BackupStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackupStream")
            .field("body", &"{ ... }")
            .field("trailers", &self.trailers)
            .finish()
    }
}

impl BackupStream {
    pub fn new(body: BodyStream, trailers: PendingTrailers) -> Self { Self { body, trailers } }

    /// Adapt an HTTP body, splitting data frames from trailer frames.
    ///
    /// Trailer frames are merged and published once the body reports its end.
    /// A frame error ends the body with that error and no trailers.
    pub fn from_body<B>(body: B) -> Self
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let (sender, trailers) = trailer_channel();
        let state = FrameState {
            frames:   Box::pin(FrameStream::new(body)),
            trailers: HeaderMap::new(),
            sender:   Some(sender),
        };

        let body = futures_util::stream::unfold(state, |mut state| async move {
            loop {
                if state.sender.is_none() {
                    return None;
                }
                match state.frames.next().await {
                    Some(Ok(frame)) => match frame.into_data() {
                        Ok(data) => return Some((Ok(data), state)),
                        Err(frame) => {
                            if let Ok(trailers) = frame.into_trailers() {
                                state.trailers.extend(trailers);
                            }
                        }
                    },
                    Some(Err(e)) => {
                        state.sender = None;
                        return Some((Err(io::Error::other(e)), state));
                    }
                    None => {
                        if let Some(sender) = state.sender.take() {
                            sender.complete(std::mem::take(&mut state.trailers));
                        }
                        return None;
                    }
                }
            }
        });

        Self::new(Box::pin(body), trailers)
    }

    /// An in-memory backup, mostly useful for tests and local sources.
    pub fn from_chunks<I>(chunks: I, trailers: HeaderMap) -> Self
    where
        I: IntoIterator<Item = Bytes>,
    {
        let mut frames: Vec<io::Result<Frame<Bytes>>> =
            chunks.into_iter().map(|chunk| Ok(Frame::data(chunk))).collect();
        if !trailers.is_empty() {
            frames.push(Ok(Frame::trailers(trailers)));
        }
        Self::from_body(StreamBody::new(futures_util::stream::iter(frames)))
    }

    pub fn into_parts(self) -> (BodyStream, PendingTrailers) { (self.body, self.trailers) }
}

struct FrameState<B> {
    frames:   Pin<Box<FrameStream<B>>>,
    trailers: HeaderMap,
    sender:   Option<TrailerSender>,
}
