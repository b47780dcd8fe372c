use super::*;

/// Position in the sampled comment tree: the `branch`-th top-level reply,
/// `depth` steps down its first-reply chain. Both count from 1.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Slot {
  pub(crate) branch: usize,
  pub(crate) depth: usize,
}

impl Display for Slot {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "p{}D{}", self.branch, self.depth)
  }
}

impl FromStr for Slot {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let (branch, depth) = s
      .strip_prefix('p')
      .and_then(|rest| rest.split_once('D'))
      .with_context(|| format!("`{s}` is not a comment slot key"))?;

    let slot = Self {
      branch: branch.parse()?,
      depth: depth.parse()?,
    };

    ensure!(
      slot.branch > 0 && slot.depth > 0,
      "comment slot `{s}` must count from 1"
    );

    Ok(slot)
  }
}

impl Slot {
  pub(crate) fn new(branch: usize, depth: usize) -> Self {
    Self { branch, depth }
  }
}
