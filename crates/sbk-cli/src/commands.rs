use anyhow::Context;
use colored::Colorize;

use sbk_reconcile::Conflict;
use sbk_roster::{Player, Roster, Team};
use sbk_rules::{rules_for, MatchFormat};
use sbk_sdk::{DeliveryInput, Scorebook};
use sbk_types::{BallCoordinate, BallOutcome, PlayerId, PlayerRole, ScorerId, TeamId, WicketKind};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args, cli.format),
        Command::Formats(_) => cmd_formats(),
    }
}

fn cmd_formats() -> anyhow::Result<()> {
    for format in [
        MatchFormat::Odi,
        MatchFormat::T20,
        MatchFormat::Test,
        MatchFormat::FirstClass,
    ] {
        let rules = rules_for(format);
        let overs = match rules.max_overs() {
            Some(cap) => format!("{cap} overs/innings"),
            None => "uncapped".to_string(),
        };
        println!(
            "{:<24} {} | {} innings/side",
            format!("{format}").bold(),
            overs.cyan(),
            rules.innings_per_side()
        );
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs, output: OutputFormat) -> anyhow::Result<()> {
    let format = match args.match_format {
        DemoFormat::Odi => MatchFormat::Odi,
        DemoFormat::T20 => MatchFormat::T20,
        DemoFormat::Test => MatchFormat::Test,
    };

    let mut book = Scorebook::new(format, demo_roster()?);
    println!(
        "{} Scorebook opened for {} ({})",
        "✓".green().bold(),
        format!("{format}").bold(),
        book.match_id().short_id().cyan()
    );

    book.start_innings(
        team("pak")?,
        team("ind")?,
        player("babar")?,
        player("fakhar")?,
    )?;
    println!("\n--- FIRST INNINGS: {} batting ---", "Pakistan".yellow());

    // Over 1: three scorers follow the broadcast feed.
    book.start_over(player("bumrah")?)?;
    ball(&mut book, 1, 1, BallOutcome::Dot, 0, 0, "defended back to the bowler")?;
    observe_all(&book, 1, 1, BallOutcome::Dot, 0)?;

    ball(&mut book, 1, 2, BallOutcome::Four, 4, 0, "brilliant cover drive")?;
    // The scorers disagree on ball 1.2.
    observe(&book, "user1", "Scorer Ali", 1, 2, BallOutcome::Four, 4)?;
    observe(&book, "user2", "Scorer Ahmed", 1, 2, BallOutcome::Single, 1)?;
    observe(&book, "user3", "Scorer Zain", 1, 2, BallOutcome::Four, 4)?;

    ball(&mut book, 1, 3, BallOutcome::Single, 1, 0, "pushed to mid-off")?;
    observe(&book, "user1", "Scorer Ali", 1, 3, BallOutcome::Single, 1)?;

    ball(&mut book, 1, 4, BallOutcome::Double, 2, 0, "placed through the gap")?;
    // Another disagreement, three ways this time.
    observe(&book, "user1", "Scorer Ali", 1, 4, BallOutcome::Double, 2)?;
    observe(&book, "user2", "Scorer Ahmed", 1, 4, BallOutcome::Triple, 3)?;
    observe(&book, "user3", "Scorer Zain", 1, 4, BallOutcome::Single, 1)?;

    book.record_delivery(
        DeliveryInput::new(coordinate(1, 5)?, BallOutcome::Wicket, 0)
            .with_wicket(WicketKind::Bowled, None)
            .with_commentary("cleaned him up"),
    )?;
    println!("  1.5  {}", "WICKET! Bowled".red().bold());
    book.set_batsmen(player("babar")?, player("rizwan")?)?;

    ball(&mut book, 1, 6, BallOutcome::Dot, 0, 0, "solid defense")?;

    // Over 2: a wide, then the re-bowled slot disappears over the ropes.
    book.start_over(player("shami")?)?;
    ball(&mut book, 2, 1, BallOutcome::Single, 1, 0, "tucked away")?;
    book.record_delivery(
        DeliveryInput::new(coordinate(2, 2)?, BallOutcome::Wide, 0).with_extras(1),
    )?;
    println!("  2.2  {}", "Wide".cyan());
    ball(&mut book, 2, 2, BallOutcome::Six, 6, 0, "out of the ground")?;
    ball(&mut book, 2, 3, BallOutcome::Four, 4, 0, "through the covers")?;
    ball(&mut book, 2, 4, BallOutcome::Single, 1, 0, "worked to square leg")?;
    ball(&mut book, 2, 5, BallOutcome::Double, 2, 0, "good running")?;
    ball(&mut book, 2, 6, BallOutcome::Dot, 0, 0, "dot to end the over")?;

    // Reconciliation.
    println!("\n--- CONFLICT RESOLUTION ---");
    let unresolved = book.list_unresolved_conflicts()?;
    for conflict in &unresolved {
        print_conflict(conflict);
    }

    let supervisor = ScorerId::new("sup1").context("supervisor id")?;

    let disputed = coordinate(1, 2)?;
    let winner = book.vote_resolution(&disputed)?;
    println!(
        "Vote for {}: {} ({} entries)",
        disputed,
        format!("{}", winner.vote_signature()).yellow(),
        book.conflict_at(&disputed)?.map_or(0, |c| c.entries().len())
    );
    let resolved = book.resolve_conflict(&disputed, winner, supervisor.clone())?;
    println!(
        "{} Conflict {} resolved by vote outcome: {}",
        "✓".green().bold(),
        disputed,
        resolved
    );

    let disputed = coordinate(1, 4)?;
    let winner = book.vote_resolution(&disputed)?;
    let resolved = book.resolve_conflict(&disputed, winner, supervisor)?;
    println!(
        "{} Conflict {} resolved by supervisor: {}",
        "✓".green().bold(),
        disputed,
        resolved
    );

    // Summary.
    let summary = book.summary()?;
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!("\n--- SCOREBOOK SUMMARY ---");
            for line in &summary.innings {
                println!(
                    "{}: {}/{} in {} overs (extras {}, run rate {:.2})",
                    line.batting_team.bold(),
                    line.runs.to_string().green().bold(),
                    line.wickets,
                    line.overs,
                    line.extras.total,
                    line.run_rate
                );
            }
            println!("\nContributors:");
            for contributor in &summary.contributors {
                println!(
                    "  {:<16} {} entries",
                    contributor.name,
                    contributor.entries
                );
            }
            println!(
                "\nConflicts: {} total, {} resolved, {} pending",
                summary.conflicts.total,
                summary.conflicts.resolved.to_string().green(),
                summary.conflicts.pending()
            );
        }
    }
    Ok(())
}

fn print_conflict(conflict: &Conflict) {
    println!(
        "{} ball {} ({} entries):",
        "CONFLICT".red().bold(),
        conflict.coordinate,
        conflict.entries().len()
    );
    for entry in conflict.entries() {
        println!(
            "  {:<16} {}",
            entry.scorer_name,
            format!("{}", entry.vote_signature()).yellow()
        );
    }
}

fn ball(
    book: &mut Scorebook,
    over: u32,
    number: u8,
    outcome: BallOutcome,
    runs: u32,
    extras: u32,
    commentary: &str,
) -> anyhow::Result<()> {
    let coord = coordinate(over, number)?;
    book.record_delivery(
        DeliveryInput::new(coord, outcome, runs)
            .with_extras(extras)
            .with_commentary(commentary),
    )?;
    println!("  {}  {}", coord, outcome);
    Ok(())
}

fn observe(
    book: &Scorebook,
    scorer_key: &str,
    name: &str,
    over: u32,
    number: u8,
    outcome: BallOutcome,
    runs: u32,
) -> anyhow::Result<()> {
    let receipt = book.submit_observation(
        ScorerId::new(scorer_key).context("scorer id")?,
        name,
        coordinate(over, number)?,
        outcome,
        runs,
        0,
        None,
    )?;
    if receipt.conflict_created {
        println!(
            "  {} scorers disagree on ball {}.{}",
            "!!!".red().bold(),
            over,
            number
        );
    }
    Ok(())
}

fn observe_all(
    book: &Scorebook,
    over: u32,
    number: u8,
    outcome: BallOutcome,
    runs: u32,
) -> anyhow::Result<()> {
    observe(book, "user1", "Scorer Ali", over, number, outcome, runs)?;
    observe(book, "user2", "Scorer Ahmed", over, number, outcome, runs)?;
    observe(book, "user3", "Scorer Zain", over, number, outcome, runs)?;
    Ok(())
}

fn coordinate(over: u32, ball: u8) -> anyhow::Result<BallCoordinate> {
    BallCoordinate::new(over, ball).context("ball coordinate")
}

fn player(key: &str) -> anyhow::Result<PlayerId> {
    PlayerId::new(key).context("player id")
}

fn team(key: &str) -> anyhow::Result<TeamId> {
    TeamId::new(key).context("team id")
}

fn demo_roster() -> anyhow::Result<Roster> {
    let roster = Roster::new();
    roster.add_player(
        Player::new(player("babar")?, "Babar Azam", 56)
            .with_role(PlayerRole::Batsman)
            .with_role(PlayerRole::Captain),
    )?;
    roster.add_player(
        Player::new(player("fakhar")?, "Fakhar Zaman", 39).with_role(PlayerRole::Batsman),
    )?;
    roster.add_player(
        Player::new(player("rizwan")?, "Mohammad Rizwan", 16)
            .with_role(PlayerRole::WicketKeeperBatsman),
    )?;
    roster.add_player(
        Player::new(player("bumrah")?, "Jasprit Bumrah", 93).with_role(PlayerRole::Bowler),
    )?;
    roster.add_player(
        Player::new(player("shami")?, "Mohammed Shami", 11).with_role(PlayerRole::Bowler),
    )?;
    roster.add_team(
        Team::new(team("pak")?, "Pakistan")
            .with_player(player("babar")?)
            .with_player(player("fakhar")?)
            .with_player(player("rizwan")?),
    )?;
    roster.add_team(
        Team::new(team("ind")?, "India")
            .with_player(player("bumrah")?)
            .with_player(player("shami")?),
    )?;
    Ok(roster)
}
