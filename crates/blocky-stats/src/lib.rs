//! Summary statistics over the results of many games.
//!
//! ```
//! use blocky_stats::descriptive::DescriptiveStats;
//!
//! let scores = [12_usize, 20, 16, 4];
//! let stats = DescriptiveStats::from_scores(scores).unwrap();
//! assert_eq!(stats.count, 4);
//! assert_eq!(stats.mean, 13.0);
//! assert_eq!(stats.median, 14.0);
//! ```

pub mod descriptive;
