pub mod collect_info;

#[cfg(test)]
pub(crate) mod test_support;
