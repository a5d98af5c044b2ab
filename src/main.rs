// model = "claude-opus-4-5"
// created = "2026-01-30"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! `ordstat`: select the kth smallest of the values given on the command line.
//!
//! ```text
//! ordstat -k 2 3 2 1 5 6 4          # 2
//! ordstat --median --count 9 7 5 5 3 3 1 8 6 4 2
//! ordstat --strategy quick -k 3 38 27 43 3 9 82 10
//! ordstat --demo
//! ```

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use env_logger::Env;

use ordstat::Selector;
use ordstat::Strategy;
use ordstat::counter::Tally;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Selection strategy: mom, quick or sort.
    #[arg(short = 's', long = "strategy", default_value = "mom")]
    strategy: Strategy,

    /// 1-indexed rank to select (1 is the smallest).
    #[arg(short = 'k', conflicts_with = "median")]
    k: Option<usize>,

    /// Select the lower median instead of a fixed rank.
    #[arg(long = "median")]
    median: bool,

    /// Also report how many comparisons were performed.
    #[arg(long = "count")]
    count: bool,

    /// Replay the built-in scenarios and exit.
    #[arg(long = "demo", conflicts_with_all = ["k", "median"])]
    demo: bool,

    /// Values to select from.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    if cli.demo {
        let mismatches = demo(cli.strategy);
        if mismatches > 0 {
            bail!("{} demo scenarios did not match", mismatches);
        }
        return Ok(());
    }

    let count = cli.count;
    let (value, comparisons) = run(&cli)?;
    println!("{}", value);
    if count {
        println!("comparisons: {}", comparisons);
    }
    return Ok(());
}

/// Run one selection, returning the selected value and the number of
/// comparisons it took.
fn run(cli: &Cli) -> Result<(i64, u64)> {
    let tally = Tally::new();
    let items = tally.wrap(&cli.values);
    let result = match (cli.k, cli.median) {
        (_, true) => cli.strategy.median(&items),
        (Some(k), false) => cli.strategy.select(&items, k),
        (None, false) => bail!("either -k <K> or --median is required"),
    };
    let comparisons = tally.count();
    let value = result
        .with_context(|| format!("{} selection over {} values", cli.strategy, cli.values.len()))?
        .into_inner();
    return Ok((value, comparisons));
}

/// One scenario: input, rank, expected answer (`None` for out of range).
struct Scenario {
    title: &'static str,
    items: &'static [i64],
    k: usize,
    expected: Option<i64>,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "2nd smallest",
        items: &[3, 2, 1, 5, 6, 4],
        k: 2,
        expected: Some(2),
    },
    Scenario {
        title: "median of nine",
        items: &[12, 3, 5, 7, 19, 26, 11, 8, 14],
        k: 5,
        expected: Some(11),
    },
    Scenario {
        title: "minimum",
        items: &[7, 10, 4, 3, 20, 15],
        k: 1,
        expected: Some(3),
    },
    Scenario {
        title: "maximum",
        items: &[7, 10, 4, 3, 20, 15],
        k: 6,
        expected: Some(20),
    },
    Scenario {
        title: "duplicates",
        items: &[9, 7, 5, 5, 3, 3, 1, 8, 6, 4, 2],
        k: 6,
        expected: Some(5),
    },
    Scenario {
        title: "invalid k",
        items: &[5, 2, 8],
        k: 10,
        expected: None,
    },
];

/// Replay `SCENARIOS`, returning how many did not match.
fn demo(strategy: Strategy) -> usize {
    let mut mismatches = 0;
    println!("strategy: {}\n", strategy);
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let result = strategy.select(scenario.items, scenario.k);
        let shown = match &result {
            Ok(v) => v.to_string(),
            Err(e) => format!("error: {}", e),
        };
        let ok = result.ok() == scenario.expected;
        println!("Test {} - {}:", i + 1, scenario.title);
        println!("  Array: {:?}", scenario.items);
        println!("  k: {}", scenario.k);
        println!("  Result: {}", shown);
        match scenario.expected {
            Some(v) => println!("  Expected: {}", v),
            None => println!("  Expected: out of range"),
        }
        println!("  {}\n", if ok { "ok" } else { "MISMATCH" });
        if !ok {
            mismatches += 1;
        }
    }
    return mismatches;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordstat::SelectError;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ordstat"];
        argv.extend_from_slice(args);
        return Cli::try_parse_from(argv).unwrap();
    }

    #[test]
    fn rank_and_median_conflict() {
        assert!(Cli::try_parse_from(["ordstat", "-k", "1", "--median", "1"]).is_err());
        assert!(Cli::try_parse_from(["ordstat", "--demo", "-k", "1"]).is_err());
        assert!(Cli::try_parse_from(["ordstat", "--demo", "--median"]).is_err());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["ordstat", "-s", "bogus", "-k", "1", "1"]).is_err());
    }

    #[test]
    fn negative_values_after_rank() {
        let cli = parse(&["-k", "2", "-5", "-1", "-3", "2"]);
        assert_eq!(cli.values, vec![-5, -1, -3, 2]);
        assert_eq!(run(&cli).unwrap().0, -3);
    }

    #[test]
    fn median_and_count() {
        let cli = parse(&["--median", "--count", "9", "7", "5", "5", "3", "3", "1", "8", "6", "4", "2"]);
        assert!(cli.count);
        let (value, comparisons) = run(&cli).unwrap();
        assert_eq!(value, 5);
        assert!(comparisons > 0);
    }

    #[test]
    fn every_strategy_from_the_command_line() {
        for strategy in Strategy::ALL {
            let cli = parse(&["-s", strategy.name(), "-k", "3", "38", "27", "43", "3", "9", "82", "10"]);
            assert_eq!(cli.strategy, strategy);
            assert_eq!(run(&cli).unwrap().0, 10);
        }
    }

    #[test]
    fn missing_rank_is_an_error() {
        let cli = parse(&["1", "2", "3"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "either -k <K> or --median is required");
    }

    #[test]
    fn out_of_range_passes_through() {
        let cli = parse(&["-k", "10", "5", "2", "8"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectError>(),
            Some(&SelectError::OutOfRange { k: 10, len: 3 })
        );
        assert_eq!(err.root_cause().to_string(), "rank 10 is out of range [1, 3]");

        let cli = parse(&["--median"]);
        assert!(run(&cli).unwrap_err().downcast_ref::<SelectError>().is_some());
    }

    #[test]
    fn demo_scenarios_all_match() {
        for strategy in Strategy::ALL {
            assert_eq!(demo(strategy), 0, "strategy {}", strategy);
        }
    }
}
