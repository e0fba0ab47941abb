// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::engine;
use crate::models::{Insight, Transaction};

/// Placeholder monthly income for the savings-rate rule. The ledger does not
/// derive this from recorded income; it is a fixed figure.
pub static MONTHLY_INCOME_BASELINE: Lazy<Decimal> = Lazy::new(|| Decimal::new(5200, 0));

static SAVINGS_HIGH: Lazy<Decimal> = Lazy::new(|| Decimal::new(20, 0));
static SAVINGS_LOW: Lazy<Decimal> = Lazy::new(|| Decimal::new(10, 0));
static DAILY_SPIKE_FACTOR: Lazy<Decimal> = Lazy::new(|| Decimal::new(15, 1));

/// Evaluates the insight rules in fixed order; each contributes at most one
/// entry. A savings rate inside [10, 20] yields no savings insight.
pub fn generate(txs: &[Transaction], reference: DateTime<Local>) -> Vec<Insight> {
    let mut insights = Vec::new();

    let baseline = *MONTHLY_INCOME_BASELINE;
    let expenses = engine::monthly_expenses(txs, reference);
    let rate = (baseline - expenses) / baseline * Decimal::ONE_HUNDRED;
    if rate > *SAVINGS_HIGH {
        insights.push(Insight {
            icon: "💰",
            title: "Great Savings!",
            description: format!("You're saving {:.1}% of your income this month.", rate),
        });
    } else if rate < *SAVINGS_LOW {
        insights.push(Insight {
            icon: "⚠️",
            title: "Low Savings",
            description: format!(
                "Consider reducing expenses to increase your {:.1}% savings rate.",
                rate
            ),
        });
    }

    if let Some(top) = engine::top_category(txs) {
        if top.total > Decimal::ZERO {
            insights.push(Insight {
                icon: "📊",
                title: "Top Spending Category",
                description: format!("{} accounts for ${:.2} of your expenses.", top.name, top.total),
            });
        }
    }

    let trend = engine::seven_day_trend(txs, reference);
    let week_total: Decimal = trend.iter().map(|p| p.total).sum();
    let daily_average = week_total / Decimal::from(7);
    let today = trend.last().map(|p| p.total).unwrap_or_default();
    if today > daily_average * *DAILY_SPIKE_FACTOR {
        insights.push(Insight {
            icon: "📈",
            title: "High Daily Spending",
            description: format!("Today's spending (${:.2}) is above your daily average.", today),
        });
    }

    insights
}
