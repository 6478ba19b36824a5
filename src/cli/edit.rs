//! Edit command arguments

use clap::Parser;

/// Arguments for edit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive section picker:\n    pagesmith edit\n\n\
                  Edit one field without prompts:\n    pagesmith edit hero --set heading='Build faster'\n\n\
                  Add a pricing plan, then drop the last FAQ entry:\n    \
                  pagesmith edit pricing --append plans\n    \
                  pagesmith edit faq --remove-last faq_items\n\n\
                  Grow a plan's feature list:\n    pagesmith edit pricing --append plans.0.features")]
pub struct EditArgs {
    /// Section to edit (hero, feature, demo, pricing, faq, footer,
    /// login, privacy_policy, terms_of_service, navbar)
    pub section: Option<String>,

    /// Set a field to a value (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Append a templated item to a list (repeatable)
    #[arg(long, value_name = "LIST")]
    pub append: Vec<String>,

    /// Remove the last item of a list; a no-op at the minimum size (repeatable)
    #[arg(long = "remove-last", value_name = "LIST")]
    pub remove_last: Vec<String>,

    /// Apply edits in memory but skip the save
    #[arg(long)]
    pub no_save: bool,
}
