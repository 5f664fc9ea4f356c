mod format;
#[cfg(test)]
mod tests;

pub use format::{
    clean_water, format_number, kilometers_to_miles, round_half_up, round_to_decimals, round_whole,
};
