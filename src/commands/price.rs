//! Price command - show the price slider

use crate::{NavError, SearchContext, output};

type Result<T> = std::result::Result<T, NavError>;

/// Execute the price command
///
/// Prints `null` (or a note) when the facet is not applicable.
///
/// # Errors
/// Returns an error if JSON output fails to serialize.
pub fn execute(ctx: &SearchContext, json: bool) -> Result<()> {
    let slider = ctx.price_slider();

    if json {
        return output::print_json(&slider);
    }

    match slider {
        Some(slider) => {
            println!(
                "{} {} – {}",
                output::header("Domain:"),
                slider.domain.min,
                slider.domain.max
            );
            println!("{} {}", output::header("Active:"), slider.value);
        }
        None => println!("Price facet not applicable"),
    }
    Ok(())
}
