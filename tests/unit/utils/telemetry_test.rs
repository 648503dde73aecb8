// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use searchbox::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        // 初始化遥测系统
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!("This is an info message");
        tracing::warn!("This is a warning message");

        // 结构化日志
        tracing::info!(
            query = "rust",
            results = 10,
            state = "success",
            "Search completed"
        );
    }
}
