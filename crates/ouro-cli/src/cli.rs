use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ouro",
    about = "Make a commit whose message embeds the hash of its own child",
    long_about = "Given commit c and its parent p, update the current git repo's HEAD to \
                  point to c', which is the same as c except that it has parent p', which \
                  is the same as p except that ${CHILD_SHA1} is replaced with sha1(c') \
                  whenever it occurs in p's commit message.",
    version,
)]
pub struct Cli {
    /// Revision of the parent commit (its message holds ${CHILD_SHA1})
    #[arg(long)]
    pub parent: String,

    /// Revision of the child commit
    #[arg(long)]
    pub child: String,

    /// Length of the SHA-1 prefix to replace ${CHILD_SHA1} with
    #[arg(long, default_value_t = 6)]
    pub prefix_length: usize,

    /// Number of parallel searches to conduct
    #[arg(long, default_value_t = 8)]
    pub parallelism: usize,

    /// Search only; don't write any objects or update HEAD
    #[arg(long)]
    pub dry_run: bool,

    /// Name of an extra header to add to the parent, expanding the search
    /// space without bound when the base space is exhausted
    #[arg(long)]
    pub extra_header: Option<String>,

    #[arg(short, long)]
    pub verbose: bool,
}
