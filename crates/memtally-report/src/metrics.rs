// memtally - Membership report toolkit
//
// Copyright (c) 2026 memtally contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Member figures and the rates derived from them.
//!
//! Every rate is guarded: a zero denominator yields `0.0` and so does any
//! quotient that is not finite, so rendered reports never show `NaN`.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use memtally_core::{MetricPath, ParsedTable};

/// Export column holding total members, dormant accounts included.
pub const TOTAL_MEMBERS: usize = 1;
/// Export column holding active members, dormant accounts excluded.
pub const ACTIVE_MEMBERS: usize = 2;
/// Export column holding withdrawals of dormant accounts.
pub const DORMANT_WITHDRAWALS: usize = 3;
/// Export column holding voluntary withdrawals.
pub const VOLUNTARY_WITHDRAWALS: usize = 4;
/// Export column holding new sign-ups. Column 5 is not reported.
pub const NEW_SIGNUPS: usize = 6;

/// The five member counts a report reads for one site or one total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberFigures {
    pub total_members: f64,
    pub active_members: f64,
    pub dormant_withdrawals: f64,
    pub voluntary_withdrawals: f64,
    pub new_signups: f64,
}

impl MemberFigures {
    /// Read the figures for `path`, substituting each export column index
    /// into every reference of the path.
    pub fn resolve(path: &MetricPath, table: &ParsedTable) -> Self {
        let at = |column: usize| path.with_column(column).value(table);
        Self {
            total_members: at(TOTAL_MEMBERS),
            active_members: at(ACTIVE_MEMBERS),
            dormant_withdrawals: at(DORMANT_WITHDRAWALS),
            voluntary_withdrawals: at(VOLUNTARY_WITHDRAWALS),
            new_signups: at(NEW_SIGNUPS),
        }
    }

    /// The count stored under an export column index, `0.0` for columns
    /// the figures do not carry.
    pub fn by_column(&self, column: usize) -> f64 {
        match column {
            TOTAL_MEMBERS => self.total_members,
            ACTIVE_MEMBERS => self.active_members,
            DORMANT_WITHDRAWALS => self.dormant_withdrawals,
            VOLUNTARY_WITHDRAWALS => self.voluntary_withdrawals,
            NEW_SIGNUPS => self.new_signups,
            _ => 0.0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_members == 0.0
            && self.active_members == 0.0
            && self.dormant_withdrawals == 0.0
            && self.voluntary_withdrawals == 0.0
            && self.new_signups == 0.0
    }

    pub fn dormancy_rate(&self) -> f64 {
        dormancy_rate(self.total_members, self.active_members)
    }

    pub fn withdrawal_rate(&self) -> f64 {
        withdrawal_rate(
            self.total_members,
            self.dormant_withdrawals,
            self.voluntary_withdrawals,
        )
    }

    pub fn net_churn_rate(&self) -> f64 {
        net_churn_rate(
            self.total_members,
            self.dormant_withdrawals,
            self.voluntary_withdrawals,
        )
    }

    pub fn new_signup_rate(&self) -> f64 {
        new_signup_rate(self.total_members, self.new_signups)
    }

    pub fn rates(&self) -> Rates {
        Rates {
            dormancy: self.dormancy_rate(),
            withdrawal: self.withdrawal_rate(),
            net_churn: self.net_churn_rate(),
            new_signup: self.new_signup_rate(),
        }
    }
}

impl Add for MemberFigures {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for MemberFigures {
    fn add_assign(&mut self, rhs: Self) {
        self.total_members += rhs.total_members;
        self.active_members += rhs.active_members;
        self.dormant_withdrawals += rhs.dormant_withdrawals;
        self.voluntary_withdrawals += rhs.voluntary_withdrawals;
        self.new_signups += rhs.new_signups;
    }
}

impl Sum for MemberFigures {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a MemberFigures> for MemberFigures {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The four rates of a [`MemberFigures`], each a fraction (not a percent).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rates {
    pub dormancy: f64,
    pub withdrawal: f64,
    pub net_churn: f64,
    pub new_signup: f64,
}

fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Share of members that are dormant: `(v1 - v2) / v1`.
pub fn dormancy_rate(total: f64, active: f64) -> f64 {
    guarded_ratio(total - active, total)
}

/// Share of the pre-withdrawal member base that withdrew:
/// `(v3 + v4) / (v1 + v3 + v4)`.
pub fn withdrawal_rate(total: f64, dormant_withdrawals: f64, voluntary: f64) -> f64 {
    let withdrawn = dormant_withdrawals + voluntary;
    guarded_ratio(withdrawn, total + withdrawn)
}

/// Voluntary withdrawals only, over the same base as [`withdrawal_rate`]:
/// `v4 / (v1 + v3 + v4)`.
pub fn net_churn_rate(total: f64, dormant_withdrawals: f64, voluntary: f64) -> f64 {
    guarded_ratio(voluntary, total + dormant_withdrawals + voluntary)
}

/// Sign-ups relative to the member base: `v6 / v1`.
pub fn new_signup_rate(total: f64, new_signups: f64) -> f64 {
    guarded_ratio(new_signups, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memtally_core::parse;

    fn figures(v1: f64, v2: f64, v3: f64, v4: f64, v6: f64) -> MemberFigures {
        MemberFigures {
            total_members: v1,
            active_members: v2,
            dormant_withdrawals: v3,
            voluntary_withdrawals: v4,
            new_signups: v6,
        }
    }

    // ==================== Rates ====================

    #[test]
    fn test_rates_from_counts() {
        let rates = figures(1000.0, 800.0, 10.0, 30.0, 50.0).rates();
        assert_eq!(rates.dormancy, 0.2);
        assert_eq!(rates.withdrawal, 40.0 / 1040.0);
        assert_eq!(rates.net_churn, 30.0 / 1040.0);
        assert_eq!(rates.new_signup, 0.05);
    }

    #[test]
    fn test_zero_total_yields_zero_member_rates() {
        assert_eq!(dormancy_rate(0.0, 5.0), 0.0);
        assert_eq!(new_signup_rate(0.0, 7.0), 0.0);
        let rates = figures(0.0, 3.0, 0.0, 0.0, 4.0).rates();
        assert_eq!(rates, Rates::default());
    }

    #[test]
    fn test_withdrawal_base_includes_withdrawals() {
        let f = figures(0.0, 0.0, 3.0, 4.0, 0.0);
        assert_eq!(f.withdrawal_rate(), 1.0);
        assert_eq!(f.net_churn_rate(), 4.0 / 7.0);
        assert_eq!(f.dormancy_rate(), 0.0);
    }

    #[test]
    fn test_net_churn_without_members() {
        assert_eq!(net_churn_rate(0.0, 0.0, 5.0), 1.0);
        assert_eq!(net_churn_rate(0.0, 5.0, 0.0), 0.0);
        assert_eq!(withdrawal_rate(0.0, 0.0, 0.0), 0.0);
        assert_eq!(net_churn_rate(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_net_churn_never_exceeds_withdrawal() {
        for (v1, v3, v4) in [(1000.0, 10.0, 30.0), (50.0, 0.0, 2.0), (7.0, 7.0, 0.0)] {
            let net = net_churn_rate(v1, v3, v4);
            assert!(net >= 0.0);
            assert!(net <= withdrawal_rate(v1, v3, v4));
        }
    }

    #[test]
    fn test_overflowing_ratio_is_zero() {
        assert_eq!(new_signup_rate(f64::MIN_POSITIVE, f64::MAX), 0.0);
    }

    // ==================== Arithmetic ====================

    #[test]
    fn test_add_and_sum() {
        let a = figures(1.0, 2.0, 3.0, 4.0, 6.0);
        let b = figures(10.0, 20.0, 30.0, 40.0, 60.0);
        assert_eq!(a + b, figures(11.0, 22.0, 33.0, 44.0, 66.0));
        assert_eq!([a, b].iter().sum::<MemberFigures>(), a + b);
        assert_eq!(
            std::iter::empty::<MemberFigures>().sum::<MemberFigures>(),
            MemberFigures::default()
        );
    }

    #[test]
    fn test_by_column() {
        let f = figures(1.0, 2.0, 3.0, 4.0, 6.0);
        for column in [1, 2, 3, 4, 6] {
            assert_eq!(f.by_column(column), column as f64);
        }
        assert_eq!(f.by_column(5), 0.0);
        assert_eq!(f.by_column(0), 0.0);
    }

    #[test]
    fn test_is_zero() {
        assert!(MemberFigures::default().is_zero());
        assert!(!figures(0.0, 0.0, 0.0, 0.0, 1.0).is_zero());
    }

    // ==================== Resolution ====================

    #[test]
    fn test_resolve_substitutes_columns() {
        let table = parse("구분\ta\tb\tc\td\te\tf\nA\t100\t90\t1\t2\t99\t5\nB\t10\t9\t0\t1\t99\t2\n");
        let single = MemberFigures::resolve(&MetricPath::single("A", 1), &table);
        assert_eq!(single, figures(100.0, 90.0, 1.0, 2.0, 5.0));

        let combined = "A/1+B/1".parse::<MetricPath>().map(|p| MemberFigures::resolve(&p, &table));
        assert_eq!(combined, Ok(figures(110.0, 99.0, 1.0, 3.0, 7.0)));
    }

    #[test]
    fn test_resolve_missing_row_is_zero() {
        let table = parse("구분\ta\nA\t1\n");
        let f = MemberFigures::resolve(&MetricPath::single("Missing", 1), &table);
        assert!(f.is_zero());
    }
}
