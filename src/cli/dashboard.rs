//! Dashboard CLI command

use clap::Args;

use super::CliContext;
use crate::display::format_dashboard;
use crate::error::{RenewalError, RenewalResult};
use crate::models::GatedAction;
use crate::services::{DashboardCalculator, DashboardFilter, DateFilter, FeatureGate, PriceFilter};

/// Dashboard filter options
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Only items with a price
    #[arg(long, conflicts_with = "free")]
    pub priced: bool,
    /// Only items without a price
    #[arg(long)]
    pub free: bool,
    /// Only completed (paid) items
    #[arg(long)]
    pub paid: bool,
    /// Restrict to expiry dates in this year
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Restrict to expiry dates in this month (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,
}

impl DashboardArgs {
    /// Build the service filter, rejecting impossible months
    pub fn to_filter(&self) -> RenewalResult<DashboardFilter> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(RenewalError::Validation(format!(
                    "Month must be between 1 and 12, got {}",
                    month
                )));
            }
        }

        let price = if self.priced {
            PriceFilter::PricedOnly
        } else if self.free {
            PriceFilter::FreeOnly
        } else {
            PriceFilter::All
        };

        Ok(DashboardFilter {
            price,
            paid_only: self.paid,
            date: DateFilter::from_parts(self.year, self.month),
        })
    }
}

/// Handle the dashboard command
pub fn handle_dashboard_command(ctx: &CliContext, args: DashboardArgs) -> RenewalResult<()> {
    FeatureGate::require(GatedAction::AccessDashboard, 0, ctx.tier())?;

    let filter = args.to_filter()?;
    let formatter = ctx.formatter();
    let calculator = DashboardCalculator::with_formatter(ctx.settings.calendar(), &formatter);
    let summary = calculator.summary(&ctx.snapshot.items, ctx.now, &filter);

    print!("{}", format_dashboard(&summary, &formatter));
    Ok(())
}
