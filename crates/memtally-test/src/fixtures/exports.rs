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

//! Pasted export fixtures.

/// The minimal well-formed export.
pub fn well_formed() -> &'static str {
    concat!(
        "조회기간:2024.01.01~2024.01.07\n",
        "구분\tA\tB\n",
        "Row1\t1,000\t2,000\n",
        "Row2\t500\t0\n",
    )
}

/// A header whose last label wraps onto a `(명)` line.
pub fn wrapped_header() -> &'static str {
    concat!(
        "조회기간: 2024.03.01 ~ 2024.03.31\n",
        "구분\t가입회원수\t탈퇴회원수\n",
        "(명)\n",
        "NE Books\t1,000\t10\n",
    )
}

/// The same row name appearing twice with different values.
pub fn duplicate_rows() -> &'static str {
    concat!(
        "구분\tA\tB\n",
        "RowX\t1\t2\n",
        "RowY\t5\t6\n",
        "RowX\t3\t4\n",
    )
}

/// Header and rows without a period line.
pub fn no_metadata() -> &'static str {
    concat!(
        "구분\tA\tB\n",
        "A\t10\t20\n",
        "B\t5\t0\n",
    )
}

/// Rows of uneven length with unreadable cells.
pub fn ragged() -> &'static str {
    concat!(
        "구분\tA\tB\tC\n",
        "Short\t1\n",
        "Long\t1\t2\t3\t4\n",
        "Garbage\tabc\t\t-\t7\n",
        "----------\n",
        "Trailing\t9\t\t\n",
    )
}

/// A full weekly membership export covering every site in the default
/// report layout.
///
/// Columns: total members incl. dormant, active members excl. dormant,
/// dormant-account withdrawals, self withdrawals, withdrawals total,
/// new signups.
pub fn membership_export() -> &'static str {
    concat!(
        "사이트별 회원 현황\n",
        "조회기간 : 2026.02.08 ~ 2026.02.14\n",
        "\n",
        "구분\t전체 가입회원수_휴면회원포함\t전체 가입유효회원수_휴면회원제외\t휴면계정 탈퇴회원수\t본인 탈퇴회원수\t탈퇴회원수 합계\t신규 가입회원수\n",
        "(명)\n",
        "NE Books\t120,000\t100,000\t500\t300\t800\t1,200\n",
        "NE Books(모바일)\t30,000\t27,000\t100\t50\t150\t600\n",
        "NE Tutor\t10,000\t9,000\t20\t30\t50\t100\n",
        "NE Tutor(클래스카드)\t2,000\t1,900\t0\t10\t10\t40\n",
        "NE Tutor(모바일)\t5,000\t4,500\t5\t5\t10\t50\n",
        "NELT\t8,000\t7,000\t10\t20\t30\t80\n",
        "Build&Grow 국문\t4,000\t3,600\t4\t6\t10\t20\n",
        "Build&Grow 국문 (모바일)\t1,000\t900\t1\t1\t2\t10\n",
        "NE Teacher\t50,000\t45,000\t100\t100\t200\t300\n",
        "NE Teacher(모바일)\t6,000\t5,400\t10\t10\t20\t30\n",
        "NE TextBook\t20,000\t20,000\t0\t0\t0\t0\n",
        "---\n",
        "NE Times\t15,000\t12,000\t30\t20\t50\t150\n",
        "NE Times(모바일)\t3,000\t2,700\t3\t2\t5\t30\n",
        "TomatoClass\t7,000\t6,300\t7\t3\t10\t70\n",
        "TomatoClass(모바일)\t1,500\t1,400\t1\t1\t2\t15\n",
        "기타\t40,000\t30,000\t0\t0\t0\t0\n",
    )
}
