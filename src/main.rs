use crate::disk::DiskSize;
use crate::naming::build_name;
use crate::pricing::calc_prices;
use crate::profile::CameraProfile;
use crate::quote::SizingQuote;
use crate::raid::plan_storage;
use crate::throughput::estimate_throughput;
use crate::tier::select_tier;
use anyhow::{bail, Result};
use clap::Parser;
use log::warn;
use std::fs::File;
use std::io::{IsTerminal, Write};

mod disk;
mod naming;
mod pricing;
mod profile;
mod quote;
mod raid;
mod throughput;
mod tier;

#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub(crate) struct Args {
	/// An optional name for the site, used as a suffix for the quote file names
	#[arg(short, long)]
	pub(crate) name: Option<String>,

	/// The number of video cameras to size for
	#[arg(short, long, value_parser=clap::value_parser!(u32).range(1..=2000))]
	pub(crate) cameras: u32,

	/// The recording profile determining archive capacity per camera
	#[arg(short, long, default_value_t = CameraProfile::FixedStandard, value_enum)]
	pub(crate) profile: CameraProfile,

	/// The size of a single archive disk, in terabytes
	#[arg(short, long, env = "CAM_SIZER_DISK_SIZE", default_value_t = DiskSize::Tb16, value_enum)]
	pub(crate) disk_size: DiskSize,

	/// Maximum fraction of usable capacity the archive is allowed to fill
	#[arg(short, long, env = "CAM_SIZER_FILL_FACTOR", default_value = "0.77")]
	pub(crate) fill_factor: f64,
}

fn main() -> Result<()> {
	// Initialise the logger
	env_logger::init();
	// Parse the command line arguments
	let args = Args::parse();
	// Compute and output the quote
	run(args)
}

fn run(args: Args) -> Result<()> {
	// The fill factor is a fraction of usable capacity
	if args.fill_factor <= 0.0 || args.fill_factor > 1.0 {
		bail!("Fill factor must be within (0, 1], got {}", args.fill_factor);
	}
	// Select the hardware tier for the camera count
	let tier = select_tier(args.cameras);
	// Aggregate recording and playback bandwidth
	let throughput = estimate_throughput(args.cameras);
	// Archive capacity required by the chosen profile
	let effective_tb = args.cameras as f64 * args.profile.per_camera_tb();
	// Size the disk array
	let plan = plan_storage(effective_tb, args.disk_size.tb(), args.fill_factor);
	if !plan.is_feasible() {
		warn!(
			"no array of {} TB disks can hold {effective_tb:.2} TB of archive, try a larger disk size",
			args.disk_size.tb()
		);
	}
	// Derive the product name code
	let name_code = build_name(args.cameras, &plan, tier);
	if name_code.is_none() && plan.is_feasible() {
		warn!("no chassis in the line holds {} disks, the quote has no product name", plan.total_disks);
	}
	// Price the configuration
	let prices = calc_prices(&plan, tier, args.disk_size.tb(), args.cameras);
	// Assemble the full quote
	let quote = SizingQuote::new(
		args.cameras,
		args.profile,
		args.disk_size,
		args.fill_factor,
		plan,
		tier,
		throughput,
		name_code,
		prices,
	);
	// Display formatting
	if std::io::stdout().is_terminal() {
		println!("--------------------------------------------------");
	}
	print!("Sizing quote for {} cameras on {} TB disks", args.cameras, args.disk_size.tb());
	println!("{}", args.name.as_ref().map(|s| format!(" - {s}")).unwrap_or_default());
	println!("{quote}");

	// Serialize the quote to a JSON string
	let json_string = serde_json::to_string_pretty(&quote)?;

	// Write the JSON string to a file
	let quote_name = args
		.name
		.as_ref()
		.map(|s| format!("quote-{s}.json"))
		.unwrap_or_else(|| "quote.json".to_string());
	let mut file = File::create(quote_name)?;
	file.write_all(json_string.as_bytes())?;

	// Write the CSV file
	let quote_csv_name = args
		.name
		.as_ref()
		.map(|s| format!("quote-{s}.csv"))
		.unwrap_or_else(|| "quote.csv".to_string());
	quote.to_csv(&quote_csv_name)?;

	Ok(())
}
