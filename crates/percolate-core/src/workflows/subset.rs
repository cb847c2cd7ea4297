use crate::collections::RandomizedQueue;
use crate::engine::config::SubsetConfig;
use crate::engine::error::EngineError;
use crate::engine::utils::sampling::rng_from_seed;
use rand::Rng;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Reads every whitespace-separated token from `reader` and writes
/// `config.count` of them to `writer`, one per line.
///
/// The tokens are chosen uniformly at random without replacement and written
/// in the order they were drawn. Returns the number of tokens written.
#[instrument(skip_all, name = "subset_workflow", fields(count = config.count))]
pub fn run<B, W>(config: &SubsetConfig, reader: B, mut writer: W) -> Result<usize, EngineError>
where
    B: BufRead,
    W: Write,
{
    let mut queue = RandomizedQueue::with_rng(rng_from_seed(config.seed));
    let read = read_tokens(reader, &mut queue)?;
    info!("Read {} token(s) from input.", read);

    let chosen = draw(&mut queue, config.count)?;
    for token in &chosen {
        writeln!(writer, "{}", token)?;
    }
    writer.flush()?;
    Ok(chosen.len())
}

/// Enqueues every whitespace-separated token of `reader`; returns how many
/// were read.
///
/// Input is split into lines as raw bytes and decoded lossily, so invalid
/// UTF-8 becomes U+FFFD inside its token instead of failing the whole read.
pub fn read_tokens<B, R>(
    reader: B,
    queue: &mut RandomizedQueue<String, R>,
) -> Result<usize, EngineError>
where
    B: BufRead,
    R: Rng,
{
    let mut read = 0;
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        if matches!(text, Cow::Owned(_)) {
            warn!(line = index + 1, "Replaced invalid UTF-8 in input");
        }
        for token in text.split_whitespace() {
            queue.enqueue(token.to_string());
            read += 1;
        }
    }
    Ok(read)
}

/// Dequeues exactly `count` items.
///
/// Fails without touching the queue when it holds fewer than `count` items.
pub fn draw<T, R: Rng>(
    queue: &mut RandomizedQueue<T, R>,
    count: usize,
) -> Result<Vec<T>, EngineError> {
    if count > queue.len() {
        return Err(EngineError::InsufficientItems {
            requested: count,
            available: queue.len(),
        });
    }
    debug!("Drawing {} of {} item(s).", count, queue.len());
    (0..count)
        .map(|_| queue.dequeue().map_err(EngineError::from))
        .collect()
}
