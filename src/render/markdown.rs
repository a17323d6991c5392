use super::format_score;
use crate::report::view::{Logo, ReportScreen, ReportViewModel, NO_FACTORS};

/// Render a screen as a markdown document.
pub fn render(screen: &ReportScreen) -> String {
    match screen {
        ReportScreen::Loading => "_Loading token report..._\n".to_string(),
        ReportScreen::Ready(model) => render_report(model),
    }
}

fn render_report(model: &ReportViewModel) -> String {
    let header = &model.header;
    let mut md = String::new();

    md.push_str(&format!("# {} ({})", header.name, header.symbol));
    if header.verified {
        md.push_str(" ✅ Verified");
    }
    md.push_str("\n\n");
    match &header.logo {
        Logo::Image { uri, alt } => md.push_str(&format!("![{}]({})\n\n", alt, uri)),
        Logo::Placeholder { uri, initial } => {
            md.push_str(&format!("![{}]({})\n\n", initial, uri))
        }
        Logo::Initial(_) => {}
    }
    md.push_str(&format!(
        "**Address:** `{}`{} | **Risk Score:** {} {} **{}**{}\n\n",
        header.address,
        if header.copied { " (copied)" } else { "" },
        format_score(header.score),
        header.tier.marker(),
        header.level,
        if header.watchlisted { " | ★ Watchlisted" } else { "" },
    ));

    if let Some(alert) = &model.alert {
        md.push_str(&format!("> **⚠ {}**\n>\n> {}\n\n", alert.title, alert.message));
    }

    let grid = &model.metadata;
    md.push_str("| Token Supply | Creation Date | Token Holders |\n");
    md.push_str("|---|---|---|\n");
    md.push_str(&format!(
        "| {} | {} | {} |\n\n",
        grid.supply,
        match &grid.created_long {
            Some(long) => format!("{} ({})", grid.created, long),
            None => grid.created.clone(),
        },
        match grid.holder_advisory {
            Some(advisory) => format!("{} ({})", grid.holders, advisory),
            None => grid.holders.clone(),
        },
    ));

    md.push_str("## Risk Analysis\n\n");
    md.push_str(&format!("{}\n\n", model.summary.summary));
    if !model.summary.recommendations.is_empty() {
        md.push_str("### Recommendations\n\n");
        for rec in &model.summary.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
        md.push('\n');
    }

    md.push_str("## Risk Factors\n\n");
    if model.factors.is_empty() {
        md.push_str(&format!("{}\n\n", NO_FACTORS));
    }
    for factor in &model.factors {
        md.push_str(&format!(
            "### {} {} [{}]\n\n{}\n\n",
            factor.tier.marker(),
            factor.category,
            factor.severity,
            factor.description
        ));
        if let Some(evidence) = &factor.evidence {
            md.push_str(&format!("- **Evidence:** {}\n", evidence));
        }
        if let Some(impact) = &factor.impact {
            md.push_str(&format!("- **Impact:** {}\n", impact));
        }
        if factor.evidence.is_some() || factor.impact.is_some() {
            md.push('\n');
        }
    }

    if let Some(deployer) = &model.deployer {
        md.push_str("## Deployer Information\n\n");
        md.push_str(&format!(
            "**Address:** `{}`{}\n\n",
            deployer.address,
            if deployer.copied { " (copied)" } else { "" }
        ));
        let links: Vec<String> = deployer
            .links
            .iter()
            .map(|link| format!("[{}]({})", link.label, link.url))
            .collect();
        md.push_str(&format!("{}\n", links.join(" · ")));
    }

    md
}
