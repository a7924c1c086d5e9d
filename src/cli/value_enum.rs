use clap::ValueEnum;
use treels_domain::TypeFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliFilter {
    File,
    Dir,
}

impl From<CliFilter> for TypeFilter {
    fn from(value: CliFilter) -> Self {
        match value {
            CliFilter::File => TypeFilter::File,
            CliFilter::Dir => TypeFilter::Dir,
        }
    }
}
