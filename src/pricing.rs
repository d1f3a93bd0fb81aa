use crate::raid::StoragePlan;
use crate::tier::HardwareTier;
use log::warn;
use serde::Serialize;

/// Markup multipliers applied to the wholesale base when quoting resale
/// prices. Business constants, not derived.
const PARTNER_MARKUP: f64 = 1.35;
const RETAIL_MARKUP: f64 = 1.55;

/// Platform price by total disk count, smallest covering bracket wins
const PLATFORM_PRICES: [(u32, u64); 3] = [(12, 120_000), (16, 160_000), (24, 240_000)];

/// CPU and motherboard bundle price by exact CPU model string
const CPU_BOARD_PRICES: [(&str, u64); 2] = [
	("Intel Core i5 Gen8 (2.1 GHz or better)", 55_000),
	("Intel Xeon E5 (2.1 GHz or better)", 145_000),
];

/// Archive disk unit price by disk size in terabytes
const DISK_PRICES: [(u32, u64); 10] = [
	(4, 9_000),
	(6, 13_000),
	(8, 17_000),
	(10, 22_000),
	(12, 26_000),
	(14, 31_000),
	(16, 36_000),
	(18, 42_000),
	(20, 48_000),
	(22, 55_000),
];

/// Price of one 8 GB RAM module
const RAM_MODULE_PRICE: u64 = 4_500;
/// Fixed price of the mirrored OS SSD pair
const OS_SSD_PRICE: u64 = 14_000;
/// Fixed OS license price
const OS_LICENSE_PRICE: u64 = 9_500;
/// Fixed RAID controller and cabling bundle price
const RAID_BUNDLE_PRICE: u64 = 52_000;
/// License price per connected camera
const CAMERA_LICENSE_PRICE: u64 = 3_000;

/// Per-component cost of a sized configuration, plus markup totals.
/// Amounts are whole currency units. A zero line item can mean either a
/// genuine zero or a gap in the price tables; gaps are logged when the
/// breakdown is computed.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PriceBreakdown {
	pub(crate) platform: u64,
	pub(crate) cpu_board: u64,
	pub(crate) ram: u64,
	pub(crate) archive_disks: u64,
	pub(crate) os_ssd: u64,
	pub(crate) os_license: u64,
	pub(crate) raid_bundle: u64,
	pub(crate) camera_licenses: u64,
	/// Wholesale input cost, the sum of all line items
	pub(crate) base_total: u64,
	/// Base total with the partner markup applied
	pub(crate) partner_price: u64,
	/// Base total with the retail markup applied
	pub(crate) retail_price: u64,
}

/// Platform price for a disk count, `None` above the largest bracket
pub(crate) fn platform_price(total_disks: u32) -> Option<u64> {
	PLATFORM_PRICES.iter().find(|(limit, _)| total_disks <= *limit).map(|(_, price)| *price)
}

/// CPU and motherboard price for an exact model string
pub(crate) fn cpu_board_price(cpu_descriptor: &str) -> Option<u64> {
	CPU_BOARD_PRICES.iter().find(|(model, _)| *model == cpu_descriptor).map(|(_, price)| *price)
}

/// Per-unit archive disk price for a disk size in terabytes
pub(crate) fn disk_price(disk_tb: f64) -> Option<u64> {
	DISK_PRICES.iter().find(|(size, _)| *size as f64 == disk_tb).map(|(_, price)| *price)
}

/// Compute the full price breakdown for a sized configuration.
///
/// Table lookups that find no entry contribute zero and emit a warning:
/// an incomplete price table is a configuration gap to surface, never a
/// reason to abort the quote.
pub(crate) fn calc_prices(
	plan: &StoragePlan,
	tier: &HardwareTier,
	disk_tb: f64,
	cameras: u32,
) -> PriceBreakdown {
	// Platform bracket by physical disk count
	let platform = platform_price(plan.total_disks).unwrap_or_else(|| {
		warn!("no platform bracket covers {} disks, pricing it at zero", plan.total_disks);
		0
	});
	// CPU and motherboard by exact model
	let cpu_board = cpu_board_price(tier.cpu_descriptor).unwrap_or_else(|| {
		warn!("no price data for CPU model {:?}, pricing it at zero", tier.cpu_descriptor);
		0
	});
	// RAM in 8 GB modules
	let ram = tier.ram_gb.div_ceil(8) as u64 * RAM_MODULE_PRICE;
	// Archive disks at the per-unit price for the chosen size
	let disk_unit = disk_price(disk_tb).unwrap_or_else(|| {
		warn!("no price data for {disk_tb} TB disks, pricing them at zero");
		0
	});
	let archive_disks = disk_unit * plan.total_disks as u64;
	// Per-camera licensing is part of the wholesale base, before markup
	let camera_licenses = cameras as u64 * CAMERA_LICENSE_PRICE;
	// Wholesale base and markup totals
	let base_total = platform
		+ cpu_board
		+ ram
		+ archive_disks
		+ OS_SSD_PRICE
		+ OS_LICENSE_PRICE
		+ RAID_BUNDLE_PRICE
		+ camera_licenses;
	PriceBreakdown {
		platform,
		cpu_board,
		ram,
		archive_disks,
		os_ssd: OS_SSD_PRICE,
		os_license: OS_LICENSE_PRICE,
		raid_bundle: RAID_BUNDLE_PRICE,
		camera_licenses,
		base_total,
		partner_price: (base_total as f64 * PARTNER_MARKUP).round() as u64,
		retail_price: (base_total as f64 * RETAIL_MARKUP).round() as u64,
	}
}
