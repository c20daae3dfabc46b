
#[cfg(test)]
mod summary_fetch_tests;

#[cfg(test)]
mod loan_list_tests;

#[cfg(test)]
mod status_update_tests;

#[cfg(test)]
mod client_config_tests;
