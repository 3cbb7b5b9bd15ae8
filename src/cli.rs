use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use vision_hive::application::dto::{BranchRequest, PageRequest, VehicleRequest, YardRequest};
use vision_hive::hierarchy::domain::{BranchId, Priority, VehicleId, YardId};
use vision_hive::hierarchy::policies::CapacityPolicy;

/// Manage branches, their yards and the vehicles parked in them
#[derive(Parser, Debug)]
#[command(name = "vision-hive")]
#[command(version)]
#[command(about = "Manage branches, their yards and the vehicles parked in them", long_about = None)]
pub struct Args {
    /// Data file holding the stored records (defaults to vision-hive.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to vision-hive.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Capacity policy for vehicle writes: enforced or advisory
    #[arg(long, global = true, value_name = "POLICY")]
    pub capacity_policy: Option<CapacityPolicy>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Branches: top-level units owning yards
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    /// Yards: capacity-bounded areas owned by a branch
    Yard {
        #[command(subcommand)]
        action: YardAction,
    },
    /// Vehicles: tracked units parked in a yard
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },
}

impl Command {
    /// Whether the command can change stored records.
    pub fn is_mutation(&self) -> bool {
        match self {
            Command::Branch { action } => !matches!(
                action,
                BranchAction::List(_) | BranchAction::Get { .. }
            ),
            Command::Yard { action } => {
                !matches!(action, YardAction::List(_) | YardAction::Get { .. })
            }
            Command::Vehicle { action } => !matches!(
                action,
                VehicleAction::List(_) | VehicleAction::Get { .. }
            ),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum BranchAction {
    Create(BranchFields),
    List(ListArgs),
    Get {
        id: BranchId,
    },
    Update {
        id: BranchId,
        #[command(flatten)]
        fields: BranchFields,
    },
    /// Delete a branch together with its yards and vehicles
    Delete {
        id: BranchId,
    },
}

#[derive(Subcommand, Debug)]
pub enum YardAction {
    Create {
        #[command(flatten)]
        fields: YardFields,
        /// Owning branch
        #[arg(long)]
        branch_id: BranchId,
    },
    List(ListArgs),
    Get {
        id: YardId,
    },
    /// Rename or resize a yard; the owning branch never changes
    Update {
        id: YardId,
        #[command(flatten)]
        fields: YardFields,
    },
    /// Delete a yard together with its vehicles
    Delete {
        id: YardId,
    },
}

#[derive(Subcommand, Debug)]
pub enum VehicleAction {
    Create(VehicleFields),
    List(ListArgs),
    Get {
        id: VehicleId,
    },
    Update {
        id: VehicleId,
        #[command(flatten)]
        fields: VehicleFields,
    },
    Delete {
        id: VehicleId,
    },
}

#[derive(ClapArgs, Debug)]
pub struct BranchFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub neighborhood: String,
    /// Tax id in DD.DDD.DDD/DDDD-DD form
    #[arg(long)]
    pub tax_id: String,
}

impl BranchFields {
    pub fn into_request(self) -> BranchRequest {
        BranchRequest::new(self.name, self.neighborhood, self.tax_id)
    }
}

#[derive(ClapArgs, Debug)]
pub struct YardFields {
    #[arg(long)]
    pub name: String,
    /// Maximum number of vehicles (must be greater than zero)
    #[arg(long, allow_hyphen_values = true)]
    pub capacity: i64,
}

impl YardFields {
    pub fn into_request(self, branch_id: BranchId) -> YardRequest {
        YardRequest::new(self.name, self.capacity, branch_id)
    }
}

#[derive(ClapArgs, Debug)]
pub struct VehicleFields {
    #[arg(long)]
    pub plate: Option<String>,
    #[arg(long)]
    pub chassis: Option<String>,
    #[arg(long)]
    pub engine_number: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub priority: Priority,
    /// Yard the vehicle is parked in
    #[arg(long)]
    pub yard_id: YardId,
}

impl VehicleFields {
    pub fn into_request(self) -> VehicleRequest {
        VehicleRequest {
            plate: self.plate,
            chassis: self.chassis,
            engine_number: self.engine_number,
            priority: self.priority,
            yard_id: self.yard_id,
        }
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct ListArgs {
    /// Page number (values below 1 mean the first page)
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<i64>,
    /// Items per page (defaults to 10, capped at 100)
    #[arg(long, allow_hyphen_values = true)]
    pub page_size: Option<i64>,
    /// Case-sensitive text contained in any searchable field
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub sort_by: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub sort_dir: Option<String>,
}

impl ListArgs {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest {
            page_number: self.page,
            page_size: self.page_size,
            search: self.search.clone(),
            sort_by: self.sort_by.clone(),
            sort_dir: self.sort_dir.clone(),
        }
    }
}
