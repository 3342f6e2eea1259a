use std::collections::{HashMap, HashSet};

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet, PySet};
use pyo3::wrap_pyfunction;

use crate::config::MiningConfig;
use crate::error::EclatError;
use crate::mine::mine;
use crate::types::FrequentItemsets;

pub type PyItemName = String;
pub type PyTid = i64;

#[pymodule]
fn eclat(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}

impl From<EclatError> for PyErr {
    fn from(err: EclatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Eclat frequent itemset mining.
///
/// Returns a dict from frozenset of items to the set of supporting transaction ids.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support_count, include_universal=True, max_len=None)")]
pub fn frequent_itemsets(
    py: Python,
    transactions: HashMap<PyTid, HashSet<PyItemName>>,
    min_support_count: i64,
    include_universal: Option<bool>,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let config = MiningConfig::from_signed(min_support_count)?
        .with_include_universal(include_universal.unwrap_or(true))
        .with_max_len(max_len);

    let frequent = py.allow_threads(|| mine(&transactions, &config))?;
    convert_frequent_itemsets(py, frequent)
}

fn convert_frequent_itemsets(
    py: Python,
    frequent: FrequentItemsets<PyItemName, PyTid>,
) -> PyResult<Py<PyDict>> {
    let entries = frequent
        .into_iter()
        .map(|(itemset, tids)| {
            let items: Vec<PyItemName> = itemset.into_iter().collect();
            let tids: Vec<PyTid> = tids.into_iter().collect();
            let items: Py<PyFrozenSet> = PyFrozenSet::new(py, &items)?.into();
            let tids: Py<PySet> = PySet::new(py, &tids)?.into();
            Ok((items, tids))
        })
        .collect::<PyResult<Vec<(Py<PyFrozenSet>, Py<PySet>)>>>()?;

    Ok(entries.into_py_dict(py).into())
}
