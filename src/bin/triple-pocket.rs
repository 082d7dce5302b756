use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use triple_pocket::config::GameConfig;
use triple_pocket::hand::{Community, HoleHand};
use triple_pocket::outcome::{determine_outcome, DealerHoles};
use triple_pocket::table::{AcceptFirst, AcceptStrong, PocketChooser, Table, TableStatus};

#[derive(Debug, Parser)]
#[clap(version, about = "Triple Pocket Hold'em evaluator and simulator")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Adjudicate a single round from explicit cards.
    Eval {
        /// The player's hole cards, e.g. "Ad 8s".
        #[clap(long, short)]
        player: String,
        /// The dealer's hole cards; pass twice.
        #[clap(long, short, num_args = 1)]
        dealer: Vec<String>,
        /// The five community cards.
        #[clap(long, short)]
        community: String,
    },
    /// Simulate seeded rounds against the dealer.
    Play {
        /// Shuffle seed.
        #[clap(long, short, default_value_t = 0)]
        seed: u64,
        /// Maximum number of rounds to play.
        #[clap(long, short, default_value_t = 100)]
        rounds: u64,
        /// Chips wagered per round, raised to the table minimum and capped at what both sides can cover.
        #[clap(long, short, default_value_t = 100)]
        wager: u64,
        /// Starting chips for each side.
        #[clap(long, default_value_t = 1000)]
        starting_chips: u64,
        /// How the player picks hole cards.
        #[clap(long, value_enum, default_value_t = Strategy::Strong)]
        strategy: Strategy,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Keep the first hole hand offered.
    First,
    /// Wait for a pocket pair or an ace.
    Strong,
}

fn eval(player: &str, dealer: &[String], community: &str) -> Result<()> {
    let [first, second] = dealer else {
        bail!("expected exactly two --dealer hands, got {}", dealer.len());
    };
    let player: HoleHand = player.parse().context("player hole cards")?;
    let dealer = DealerHoles::new(
        first.parse::<HoleHand>().context("first dealer hole cards")?,
        second.parse::<HoleHand>().context("second dealer hole cards")?,
    );
    let community: Community = community.parse().context("community cards")?;

    let outcome = determine_outcome(&player, &dealer, &community)?;
    let (p, d, pm, dm) = outcome.as_tuple();
    println!("player: {p} ({})", fmt_cards(outcome.player_best.cards()));
    println!("dealer: {d} ({})", fmt_cards(outcome.dealer_best.cards()));
    println!("winner: {:?}  multiples: player {pm:+} dealer {dm:+}", outcome.winner);
    Ok(())
}

fn fmt_cards(cards: &[triple_pocket::cards::Card]) -> String {
    cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn play(config: GameConfig, seed: u64, rounds: u64, wager: u64, strategy: Strategy) -> Result<()> {
    let mut table = Table::new(config, seed);
    let mut chooser: Box<dyn PocketChooser> = match strategy {
        Strategy::First => Box::new(AcceptFirst),
        Strategy::Strong => Box::new(AcceptStrong),
    };

    for _ in 0..rounds {
        if table.status() != TableStatus::Continuing {
            break;
        }
        let stake = table.clamp_wager(wager);
        table.play_round(stake, chooser.as_mut())?;
    }

    info!("finished after {} rounds: {}", table.rounds(), table.status());
    println!(
        "rounds: {}  player: {}  dealer: {}  status: {}",
        table.rounds(),
        table.player(),
        table.dealer(),
        table.status()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Eval { player, dealer, community } => eval(&player, &dealer, &community),
        Command::Play { seed, rounds, wager, starting_chips, strategy } => {
            let config = GameConfig::default().with_starting_chips(starting_chips);
            play(config, seed, rounds, wager, strategy)
        }
    }
}
