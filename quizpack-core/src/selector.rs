//! Random block selection

use crate::error::{CoreError, Result};
use crate::parser::Block;
use rand::Rng;

/// Pick one block uniformly at random
///
/// The draw is not retried: if the chosen block is longer than
/// `max_length` characters the whole request fails with
/// [`CoreError::BlockTooLarge`], even when other blocks would fit.
pub fn select_block<'a, R>(
    blocks: &'a [Block],
    max_length: usize,
    rng: &mut R,
) -> Result<&'a Block>
where
    R: Rng + ?Sized,
{
    if blocks.is_empty() {
        return Err(CoreError::EmptyCorpus);
    }

    let index = rng.gen_range(0..blocks.len());
    let block = &blocks[index];
    check_block_length(block, max_length)?;

    log::info!("selected block #{} of {}", index, blocks.len());
    Ok(block)
}

/// Reject a block longer than `max_length` characters
pub fn check_block_length(block: &Block, max_length: usize) -> Result<()> {
    let length = block.char_len();
    if length > max_length {
        return Err(CoreError::BlockTooLarge {
            index: block.index,
            length,
            max: max_length,
        });
    }
    Ok(())
}
