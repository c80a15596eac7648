pub mod stats_query_postgres;
