//! Command handlers
//!
//! Each handler takes the session and the words after the command name and
//! returns the lines to print. Handlers that reach the network go through
//! [`PokeApiClient::fetch_cached`](crate::client::PokeApiClient::fetch_cached).

use tracing::{debug, info};

use crate::commands::{CommandTable, Reply};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon, PokemonResponse};
use crate::session::Session;

/// A roll below this value catches the Pokémon.
pub const CATCH_THRESHOLD: u32 = 50;

/// Returns the first argument if it can be used as a PokeAPI path segment.
///
/// Names are lowercase ASCII letters, digits, `-` and `_`; anything else
/// could change which endpoint the URL points at.
fn resource_name<'a>(args: &'a [String], usage: &'static str) -> Result<&'a str> {
    let name = args.first().ok_or(PokedexError::MissingArgument(usage))?;
    let valid = name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
    if !valid {
        return Err(PokedexError::InvalidArgument(name.clone()));
    }
    Ok(name)
}

pub fn help(table: &CommandTable) -> Reply {
    let mut lines = vec![
        "Welcome to the Pokedex!".to_string(),
        "Usage:".to_string(),
        String::new(),
    ];
    lines.extend(
        table
            .sorted()
            .into_iter()
            .map(|spec| format!("{}: {}", spec.name, spec.description)),
    );
    Reply::lines(lines)
}

pub fn exit() -> Reply {
    Reply::quit("Closing the Pokedex... Goodbye!")
}

/// Shows the next page of location areas.
pub async fn map(session: &mut Session) -> Result<Reply> {
    let Some(url) = session.next_page.clone() else {
        return Ok(Reply::line("you're on the last page"));
    };
    show_location_page(session, &url).await
}

/// Shows the previous page of location areas.
pub async fn map_back(session: &mut Session) -> Result<Reply> {
    let Some(url) = session.previous_page.clone() else {
        return Ok(Reply::line("you're on the first page"));
    };
    show_location_page(session, &url).await
}

async fn show_location_page(session: &mut Session, url: &str) -> Result<Reply> {
    let page: LocationAreaPage = session.client().fetch_cached(session.cache(), url).await?;

    // Cursors move only once the page decoded
    session.next_page = page.next;
    session.previous_page = page.previous;
    debug!(
        next = ?session.next_page,
        previous = ?session.previous_page,
        "Moved location cursors"
    );

    Ok(Reply::lines(page.results.into_iter().map(|area| area.name)))
}

/// Lists the Pokémon that can be encountered in an area.
pub async fn explore(session: &mut Session, args: &[String]) -> Result<Reply> {
    let area = resource_name(args, "explore <area-name>")?;

    let url = session.client().location_area_url(area);
    let detail: LocationAreaDetail = session.client().fetch_cached(session.cache(), &url).await?;

    let mut lines = vec![format!("Exploring {}...", detail.name)];
    if detail.pokemon_encounters.is_empty() {
        lines.push("No Pokemon found.".to_string());
    } else {
        lines.push("Found Pokemon:".to_string());
        lines.extend(
            detail
                .pokemon_encounters
                .into_iter()
                .map(|encounter| format!(" - {}", encounter.pokemon.name)),
        );
    }
    Ok(Reply::lines(lines))
}

/// Tries to catch a Pokémon. Higher base experience makes it harder.
pub async fn catch(session: &mut Session, args: &[String]) -> Result<Reply> {
    let name = resource_name(args, "catch <pokemon-name>")?;

    let url = session.client().pokemon_url(name);
    let response: PokemonResponse = session.client().fetch_cached(session.cache(), &url).await?;

    let mut lines = vec![format!("Throwing a Pokeball at {}...", response.name)];
    let roll = session.roll(response.base_experience.unwrap_or(0));
    debug!(name = %response.name, roll, "Catch roll");

    if roll < CATCH_THRESHOLD {
        let pokemon = Pokemon::from(response);
        lines.push(format!("{} was caught!", pokemon.name));
        lines.push("You may now inspect it with the inspect command.".to_string());
        info!(name = %pokemon.name, "Pokemon caught");
        session.registry().save(pokemon).await;
    } else {
        lines.push(format!("{} escaped!", response.name));
    }
    Ok(Reply::lines(lines))
}

/// Prints the details of a caught Pokémon.
pub async fn inspect(session: &mut Session, args: &[String]) -> Result<Reply> {
    let name = resource_name(args, "inspect <pokemon-name>")?;

    let Some(pokemon) = session.registry().get(name).await else {
        return Ok(Reply::line("you have not caught that pokemon"));
    };

    let mut lines = vec![
        format!("Name: {}", pokemon.name),
        format!("Height: {}", pokemon.height),
        format!("Weight: {}", pokemon.weight),
        "Stats:".to_string(),
    ];
    lines.extend(
        pokemon
            .stats
            .iter()
            .map(|(stat, value)| format!("  -{}: {}", stat, value)),
    );
    lines.push("Types:".to_string());
    lines.extend(pokemon.types.iter().map(|kind| format!("  - {}", kind)));
    Ok(Reply::lines(lines))
}

/// Lists caught Pokémon by name.
pub async fn pokedex(session: &mut Session) -> Result<Reply> {
    let mut names: Vec<String> = session
        .registry()
        .list_all()
        .await
        .into_iter()
        .map(|pokemon| pokemon.name)
        .collect();

    if names.is_empty() {
        return Ok(Reply::line("Your Pokedex is empty. Go catch some Pokemon!"));
    }

    names.sort_unstable();
    let mut lines = vec!["Your Pokedex:".to_string()];
    lines.extend(names.into_iter().map(|name| format!(" - {}", name)));
    Ok(Reply::lines(lines))
}

/// Prints response cache statistics.
pub async fn cache_stats(session: &mut Session) -> Result<Reply> {
    let stats = session.cache().stats().await;
    let last_sweep = stats
        .last_sweep
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    Ok(Reply::lines([
        format!("Entries: {}", stats.total_entries),
        format!("Retention: {}s", session.cache().retention().as_secs_f64()),
        format!("Hits: {}", stats.hits),
        format!("Misses: {}", stats.misses),
        format!("Hit rate: {:.1}%", stats.hit_rate() * 100.0),
        format!("Evictions: {}", stats.evictions),
        format!("Last sweep: {}", last_sweep),
    ]))
}
