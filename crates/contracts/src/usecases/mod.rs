pub mod sales_query;
