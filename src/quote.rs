use crate::disk::DiskSize;
use crate::pricing::PriceBreakdown;
use crate::profile::CameraProfile;
use crate::raid::StoragePlan;
use crate::throughput::Throughput;
use crate::tier::HardwareTier;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use csv::Writer;
use serde::Serialize;
use std::fmt::{Display, Formatter};

const HEADERS: [&str; 2] = ["Item", "Value"];

const CSV_HEADERS: [&str; 2] = ["field", "value"];

/// Fixed server platform lines carried into every quote
const OS_PLATFORM: &str = "RED OS 7.3 or later";
const OS_STORAGE: &str = "2x SSD, RAID1";
const NETWORK: &str = "at least 2x 1000BASE-T";

/// The server block of a quote: the selected hardware tier plus the fixed
/// platform requirements of the product line.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ServerSpec {
	pub(crate) cpu: &'static str,
	pub(crate) cores: &'static str,
	pub(crate) ram_gb: u32,
	pub(crate) os: &'static str,
	pub(crate) os_storage: &'static str,
	pub(crate) network: &'static str,
}

impl ServerSpec {
	pub(crate) fn new(tier: &HardwareTier) -> Self {
		Self {
			cpu: tier.cpu_descriptor,
			cores: tier.core_count,
			ram_gb: tier.ram_gb,
			os: OS_PLATFORM,
			os_storage: OS_STORAGE,
			network: NETWORK,
		}
	}
}

/// The full sizing quote: every input, the computed plan and derived
/// figures, serialized as the downloadable record. The field set is the
/// stable export contract of the tool.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SizingQuote {
	/// When this quote was generated, UTC epoch seconds
	pub(crate) generated_at: i64,
	/// Version of the tool that produced the quote
	pub(crate) tool_version: &'static str,
	pub(crate) cameras: u32,
	pub(crate) profile: CameraProfile,
	pub(crate) profile_description: &'static str,
	pub(crate) per_camera_tb: f64,
	pub(crate) effective_archive_tb: f64,
	pub(crate) fill_factor: f64,
	pub(crate) disk_tb: f64,
	pub(crate) plan: StoragePlan,
	pub(crate) server: ServerSpec,
	pub(crate) throughput: Throughput,
	/// Canonical product name, absent when no chassis fits the array
	pub(crate) name_code: Option<String>,
	pub(crate) prices: PriceBreakdown,
}

impl SizingQuote {
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn new(
		cameras: u32,
		profile: CameraProfile,
		disk_size: DiskSize,
		fill_factor: f64,
		plan: StoragePlan,
		tier: &HardwareTier,
		throughput: Throughput,
		name_code: Option<String>,
		prices: PriceBreakdown,
	) -> Self {
		let per_camera_tb = profile.per_camera_tb();
		Self {
			generated_at: chrono::Utc::now().timestamp(),
			tool_version: env!("CARGO_PKG_VERSION"),
			cameras,
			profile,
			profile_description: profile.description(),
			per_camera_tb,
			effective_archive_tb: cameras as f64 * per_camera_tb,
			fill_factor,
			disk_tb: disk_size.tb(),
			plan,
			server: ServerSpec::new(tier),
			throughput,
			name_code,
			prices,
		}
	}

	/// The quote as labelled rows, shared by the table and CSV renderers
	fn rows(&self) -> Vec<(String, String)> {
		let mut rows = vec![
			("Cameras".to_string(), self.cameras.to_string()),
			("Recording profile".to_string(), self.profile_description.to_string()),
			("Archive per camera".to_string(), format!("{:.2} TB", self.per_camera_tb)),
			("Effective archive".to_string(), format!("{:.2} TB", self.effective_archive_tb)),
			("Fill factor".to_string(), format!("{:.2}", self.fill_factor)),
			("Disk size".to_string(), format!("{:.0} TB", self.disk_tb)),
			("RAID layout".to_string(), self.plan.layout.to_string()),
			("Base disks".to_string(), self.plan.base_disks.to_string()),
			("Hot spares".to_string(), self.plan.hot_spares.to_string()),
			("Total disks".to_string(), self.plan.total_disks.to_string()),
			("Usable capacity".to_string(), format!("{:.2} TB", self.plan.usable_tb)),
			("Required usable".to_string(), format!("{:.2} TB", self.plan.required_usable_tb)),
			("Raw capacity".to_string(), format!("{:.2} TB", self.plan.raw_tb)),
			("CPU".to_string(), self.server.cpu.to_string()),
			("Physical cores".to_string(), self.server.cores.to_string()),
			("RAM".to_string(), format!("{} GB", self.server.ram_gb)),
			("OS".to_string(), self.server.os.to_string()),
			("OS storage".to_string(), self.server.os_storage.to_string()),
			("Network".to_string(), self.server.network.to_string()),
			("Write throughput".to_string(), format!("{} Mbit/s", self.throughput.write_mbps)),
			("Read throughput".to_string(), format!("{} Mbit/s", self.throughput.read_mbps)),
			(
				"Product name".to_string(),
				self.name_code.clone().unwrap_or_else(|| "no chassis fits this array".to_string()),
			),
			("Platform".to_string(), self.prices.platform.to_string()),
			("CPU and motherboard".to_string(), self.prices.cpu_board.to_string()),
			("RAM modules".to_string(), self.prices.ram.to_string()),
			("Archive disks".to_string(), self.prices.archive_disks.to_string()),
			("OS SSD pair".to_string(), self.prices.os_ssd.to_string()),
			("OS license".to_string(), self.prices.os_license.to_string()),
			("RAID controller and cabling".to_string(), self.prices.raid_bundle.to_string()),
			("Camera licenses".to_string(), self.prices.camera_licenses.to_string()),
			("Wholesale base".to_string(), self.prices.base_total.to_string()),
			("Partner price".to_string(), self.prices.partner_price.to_string()),
			("Retail price".to_string(), self.prices.retail_price.to_string()),
		];
		if !self.plan.is_feasible() {
			rows.push((
				"Note".to_string(),
				"no feasible array at this disk size, try a larger disk".to_string(),
			));
		}
		rows
	}

	/// Write the quote to a CSV file as field/value records
	pub(crate) fn to_csv(&self, path: &str) -> Result<(), csv::Error> {
		let mut w = Writer::from_path(path)?;
		// Write headers
		w.write_record(CSV_HEADERS)?;
		// Write one record per quote field
		for (field, value) in self.rows() {
			w.write_record([field, value])?;
		}
		// Ensure all data is flushed to the file
		w.flush()?;
		Ok(())
	}
}

impl Display for SizingQuote {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut table = Table::new();
		table
			.load_preset(UTF8_FULL)
			.apply_modifier(UTF8_ROUND_CORNERS)
			.set_content_arrangement(ContentArrangement::Dynamic);
		// Set the quote table header row
		let headers = HEADERS.map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Blue));
		table.set_header(headers);
		// Add one row per quote field
		for (field, value) in self.rows() {
			table.add_row(vec![field, value]);
		}
		// Right align the value column
		let column = table.column_mut(1).expect("The table needs two columns");
		column.set_cell_alignment(CellAlignment::Right);
		// Output the formatted table
		write!(f, "{table}")
	}
}
