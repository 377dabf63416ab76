use anyhow::{bail, Error, Result};

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::item::Item;

pub const PROMPT: &str = "Sort by (n)ame, (p)ct sold, (s)tocking need, or (q) to quit: ";
pub const HEADER: &str = "Item Name            Sold     % Sold     In Stock Stock needs";

/// One of the operator's sort choices.
///
/// Parsed from a full line of input; exactly the tokens `n`, `p`, `s`,
/// and `q` are recognized (case-sensitive, no prefixes).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    Name,
    PctSold,
    StockNeed,
    Quit,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::Name),
            "p" => Ok(Self::PctSold),
            "s" => Ok(Self::StockNeed),
            "q" => Ok(Self::Quit),
            _ => bail!("unrecognized choice: {s:?}"),
        }
    }
}

/// Stable-sorts `items` in place by `key`.
///
/// Name sorts ascending; percent sold and stocking need sort descending,
/// best candidate for attention first. [`SortKey::Quit`] leaves the order
/// untouched.
pub fn sort(items: &mut [Item], key: SortKey) {
    match key {
        SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PctSold => items.sort_by(|a, b| b.sold_pct().total_cmp(&a.sold_pct())),
        SortKey::StockNeed => items.sort_by(|a, b| b.stock_need().cmp(&a.stock_need())),
        SortKey::Quit => {}
    }
}

/// Writes the inventory table for `items`, in their current order,
/// followed by a blank line.
///
/// # Errors
///
/// Returns any errors from writing to `output`.
pub fn write_table(items: &[Item], output: &mut impl Write) -> Result<()> {
    writeln!(output, "{HEADER}")?;
    for item in items {
        writeln!(
            output,
            "{:<20} {:>8} {:>8.2}% {:>8} {:>8}",
            item.name,
            item.sold(),
            item.sold_pct() * 100.0,
            item.in_stock,
            item.stock_need(),
        )?;
    }
    writeln!(output)?;
    Ok(())
}

/// Runs the interactive sort/print loop over `items`.
///
/// Each cycle prompts on `output`, reads one line from `input`, re-sorts
/// the list if the line is a recognized [`SortKey`], and prints the table.
/// The loop terminates on the quit token or end of input, printing
/// nothing further.
///
/// An unrecognized line normally reprints the table in its previous
/// order. With `strict` set, it reports the bad choice to the operator
/// instead of printing a table.
///
/// # Errors
///
/// Returns any errors from reading `input` or writing `output`.
pub fn run(
    mut items: Vec<Item>,
    input: impl BufRead,
    mut output: impl Write,
    strict: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let token = line.strip_suffix('\r').unwrap_or(&line);
        match token.parse() {
            Ok(SortKey::Quit) => break,
            Ok(key) => {
                sort(&mut items, key);
                write_table(&items, &mut output)?;
            }
            Err(err) if strict => writeln!(output, "{err}")?,
            Err(_) => write_table(&items, &mut output)?,
        }
    }
    Ok(())
}
