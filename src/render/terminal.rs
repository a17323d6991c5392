use std::fmt::{self, Write as _};

use colored::{Color, ColoredString, Colorize};

use super::format_score;
use crate::report::severity::SeverityTier;
use crate::report::types::RiskLevel;
use crate::report::view::{
    FactorView, Header, Logo, MetadataGrid, ReportScreen, ReportViewModel, NO_FACTORS,
};

const SKELETON_WIDTHS: [usize; 4] = [36, 48, 24, 48];

/// Render a screen for an ANSI terminal.
pub fn render(screen: &ReportScreen) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = match screen {
        ReportScreen::Loading => render_loading(&mut out),
        ReportScreen::Ready(model) => render_report(&mut out, model),
    };
    out
}

fn render_loading(out: &mut String) -> fmt::Result {
    writeln!(out)?;
    for width in SKELETON_WIDTHS {
        writeln!(out, "{}", "░".repeat(width).bright_black())?;
    }
    Ok(())
}

fn render_report(out: &mut String, model: &ReportViewModel) -> fmt::Result {
    writeln!(out)?;
    render_header(out, &model.header)?;

    if let Some(alert) = &model.alert {
        writeln!(out, "{} {}", "▲".red().bold(), alert.title.red().bold())?;
        writeln!(out, "  {}", alert.message.red())?;
        writeln!(out)?;
    }

    render_metadata(out, &model.metadata)?;

    writeln!(out, "═══ Risk Analysis ═══")?;
    writeln!(out, "{}", model.summary.summary)?;
    if !model.summary.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Recommendations".bright_black())?;
        for rec in &model.summary.recommendations {
            writeln!(out, "  • {}", rec)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "═══ Risk Factors ═══")?;
    if model.factors.is_empty() {
        writeln!(out, "  {}", NO_FACTORS.bright_black())?;
    } else {
        for factor in &model.factors {
            render_factor(out, factor)?;
        }
    }
    writeln!(out)?;

    if let Some(deployer) = &model.deployer {
        writeln!(out, "═══ Deployer Information ═══")?;
        writeln!(
            out,
            "Address: {} {}",
            deployer.short_address,
            copy_marker(deployer.copied)
        )?;
        for link in &deployer.links {
            writeln!(out, "  ↗ {}: {}", link.label, link.url.underline())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn render_header(out: &mut String, header: &Header) -> fmt::Result {
    let logo = match &header.logo {
        Logo::Image { uri, .. } => format!("[{}]", uri),
        Logo::Placeholder { initial, .. } | Logo::Initial(initial) => format!("({})", initial),
    };
    let verified = if header.verified {
        format!(" {}", "✔ Verified".blue())
    } else {
        String::new()
    };
    writeln!(
        out,
        "{} ({}){}",
        header.name.bold(),
        header.symbol.bright_black(),
        verified
    )?;
    writeln!(out, "  Logo: {}", logo.bright_black())?;
    writeln!(
        out,
        "  {} {}",
        header.short_address,
        copy_marker(header.copied)
    )?;
    let star = if header.watchlisted {
        "★".yellow()
    } else {
        "☆".normal()
    };
    writeln!(
        out,
        "  Risk Score: {} {}   {} {}",
        format_score(header.score).bold(),
        colorize_level(&header.level, header.tier),
        star,
        header.watchlist_label.bright_black()
    )?;
    writeln!(out)
}

fn render_metadata(out: &mut String, grid: &MetadataGrid) -> fmt::Result {
    writeln!(out, "{:<16}{}", "Token Supply".bright_black(), grid.supply.bold())?;
    writeln!(out, "{:<16}{}", "Creation Date".bright_black(), grid.created.bold())?;
    if let Some(long) = &grid.created_long {
        writeln!(out, "{:<16}{}", "", long.bright_black())?;
    }
    writeln!(out, "{:<16}{}", "Token Holders".bright_black(), grid.holders.bold())?;
    if let Some(advisory) = grid.holder_advisory {
        writeln!(out, "{:<16}{}", "", advisory.bright_black())?;
    }
    writeln!(out)
}

fn render_factor(out: &mut String, factor: &FactorView) -> fmt::Result {
    let bar = "│".color(factor.tier.border());
    let control = match factor.toggle_label() {
        Some(label) => {
            let arrow = if factor.expanded { "▴" } else { "▾" };
            format!("  {} {}", arrow, label).bright_black().to_string()
        }
        None => String::new(),
    };
    writeln!(
        out,
        "{} {} {}{}",
        bar,
        factor.category.bold(),
        severity_badge(&factor.severity, factor.tier),
        control
    )?;
    writeln!(out, "{} {}", bar, factor.description)?;
    if let Some(evidence) = &factor.evidence {
        writeln!(out, "{}   {} {}", bar, "Evidence:".bright_black(), evidence)?;
    }
    if let Some(impact) = &factor.impact {
        writeln!(out, "{}   {} {}", bar, "Impact:".bright_black(), impact)?;
    }
    writeln!(out)
}

fn copy_marker(copied: bool) -> ColoredString {
    if copied {
        "✔ Copied".green()
    } else {
        "⧉ copy".bright_black()
    }
}

fn severity_badge(level: &RiskLevel, tier: SeverityTier) -> ColoredString {
    format!(" {} ", level)
        .color(Color::Black)
        .on_color(tier.background())
}

/// Helper to colorize a risk level string for terminal output.
fn colorize_level(level: &RiskLevel, tier: SeverityTier) -> ColoredString {
    level.to_string().color(tier.border()).bold()
}
