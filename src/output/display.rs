//! Display functions for command results

use super::formatters::{
    create_progress_bar, entropy_bar, response_label, spaced_code, verdict_label,
};
use crate::commands::{AnalysisResult, CheckResult, Explanation, SeededPuzzle, SolveReport};
use crate::core::Verdict;
use crate::puzzles::Puzzle;
use colored::Colorize;

/// Print the solution set of a puzzle
///
/// At most `limit` codes are listed.
pub fn print_solve_report(report: &SolveReport, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SOLUTIONS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔐 {} clues over {} codes of {} digits",
        report.clue_count, report.space_size, report.code_length
    );
    println!("   Time taken:   {:.3}s", report.duration.as_secs_f64());

    if report.solutions.is_empty() {
        println!(
            "\n{}",
            "❌ No code satisfies every clue. Check the puzzle configuration."
                .red()
                .bold()
        );
        return;
    }

    let count = report.solutions.len();
    let summary = if let Some(code) = report.solutions.unique() {
        format!("✅ Unique solution: {code}").green().bold()
    } else {
        format!("{count} codes satisfy every clue").yellow().bold()
    };
    println!("\n{summary}");

    if report.shown.len() != count {
        println!(
            "   {} of them use each digit at most once",
            report.shown.len()
        );
    }

    if report.solutions.unique().is_none() {
        let limit = limit.unwrap_or(usize::MAX);
        for code in report.shown.iter().take(limit) {
            println!("  • {code}");
        }
        if report.shown.len() > limit {
            println!("  … {} more", report.shown.len() - limit);
        }
    }
}

/// Print per-clue verdicts for a partial code
pub fn print_check_result(result: &CheckResult) {
    println!("\n  {}\n", spaced_code(&result.input).bright_white().bold());

    for row in &result.verdicts {
        let marker = match row.verdict {
            Verdict::Valid => row.verdict.symbol().to_string().green(),
            Verdict::Invalid => row.verdict.symbol().to_string().red(),
            Verdict::Unknown => row.verdict.symbol().to_string().bright_black(),
        };
        println!(
            "  {marker} {}  {:<10} {}",
            row.guess,
            verdict_label(row.verdict),
            row.label.bright_black()
        );
    }

    let bar = create_progress_bar(
        result.valid_count() as f64,
        result.verdicts.len() as f64,
        20,
    );
    println!(
        "\n  [{}] {}/{} clues satisfied",
        bar.green(),
        result.valid_count(),
        result.verdicts.len()
    );

    if !result.permitted {
        println!("  {}", "Each digit may be used only once".yellow());
    }
    if result.unlocked {
        println!("  {}", "🔓 The lock opens!".green().bold());
    }
    println!();
}

/// Print digit and position counts of a code against every clue
pub fn print_explanation(explanation: &Explanation) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Explaining: {}",
        explanation.code.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for clue in &explanation.clues {
        let status = if clue.hint.satisfies {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("\n{status} {} {}", clue.guess.bold(), clue.label.bright_black());
        println!(
            "  Digits:    {} shared (needs {})",
            clue.hint.digit_matches, clue.target.digit_matches
        );
        println!(
            "  Positions: {} in place (needs {})",
            clue.hint.position_matches, clue.target.position_matches
        );
    }

    println!();
    if explanation.satisfies_all() {
        println!("{}", "✅ Consistent with every clue".green().bold());
    } else {
        let failing = explanation.clues.iter().filter(|c| !c.hint.satisfies).count();
        println!(
            "{}",
            format!("❌ Conflicts with {failing} clue(s)").red().bold()
        );
    }
}

/// Print the result of probe analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROBE ANALYSIS:".bright_cyan().bold(),
        result.probe.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} remaining codes:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} codes remain", result.max_partition);

    if !result.partitions.is_empty() {
        println!("\n📈 {}", "Responses:".bright_cyan().bold());
        for (response, size) in &result.partitions {
            println!("   {:<24} {size:>6}", response_label(*response));
        }
    }
}

/// Print generated puzzles in the clue file format
pub fn print_generated(puzzles: &[SeededPuzzle]) {
    for seeded in puzzles {
        println!("# seed {}, solution {}", seeded.seed, seeded.puzzle.secret);
        match Puzzle::new(seeded.puzzle.clues.clone()) {
            Ok(puzzle) => print!("{}", puzzle.to_text()),
            Err(e) => println!("# {e}"),
        }
        println!();
    }
}
