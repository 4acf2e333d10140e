//! Shared temporary name helpers for platform modules.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique hidden sibling name for atomic config writes.
/// Pattern: .link_export.config.tmp.<pid>.<nanos>.<seq>
pub fn tmp_config_sibling_name(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(".link_export.config.tmp.{pid}.{nanos}.{seq}");
    target.parent().unwrap_or_else(|| Path::new(".")).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn uniqueness_concurrent() {
        let target = Path::new("dummy.xml");
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let t = target.to_path_buf();
                thread::spawn(move || tmp_config_sibling_name(&t))
            })
            .collect();
        let mut set = HashSet::new();
        for h in handles {
            assert!(set.insert(h.join().unwrap()));
        }
        assert_eq!(set.len(), 32);
    }
}
