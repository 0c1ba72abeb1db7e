// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use toolbelt_core::{MaskConfig, mask_sensitive_info};

fn bench_mask_phone_number(c: &mut Criterion) {
    c.bench_function("mask_sensitive_info (phone)", |b| {
        b.iter(|| mask_sensitive_info(black_box("13722164537"), 3, 4));
    });
}

fn bench_mask_id_card(c: &mut Criterion) {
    let config = MaskConfig::new(4, 4);
    c.bench_function("MaskConfig::mask (id card)", |b| {
        b.iter(|| config.mask(black_box("123456199001011234")));
    });
}

fn bench_mask_numeric(c: &mut Criterion) {
    c.bench_function("mask_sensitive_info (u64)", |b| {
        b.iter(|| mask_sensitive_info(black_box(13_722_164_537_u64), 3, 4));
    });
}

fn bench_mask_too_short(c: &mut Criterion) {
    c.bench_function("mask_sensitive_info (too short)", |b| {
        b.iter(|| mask_sensitive_info(black_box("12345"), 3, 2));
    });
}

criterion_group!(
    benches,
    bench_mask_phone_number,
    bench_mask_id_card,
    bench_mask_numeric,
    bench_mask_too_short,
);
criterion_main!(benches);
