// Log calls grouped by the rule they exercise. A trailing `expect:` comment
// names the finding the line must produce; lines without one must be clean.

fn lowercase_start() {
    slog::Info("Starting server on port 8080"); // expect: log message should start with lowercase letter
    slog::Error("Failed to connect to database"); // expect: log message should start with lowercase letter

    slog::Info("starting server on port 8080");
    slog::Error("failed to connect to database");
}

fn english_only() {
    slog::Info("Запуск сервера"); // expect: log message should be in English only
    slog::Error("Ошибка подключения к базе данных"); // expect: log message should be in English only

    slog::Info("starting server");
    slog::Error("failed to connect to database");
}

fn english_only_context(ctx: Context) {
    slog::InfoContext(ctx, "Обработка запроса"); // expect: log message should be in English only

    slog::InfoContext(ctx, "processing request");
}

fn special_chars() {
    slog::Info("server started!🚀"); // expect: log message should not contain emojis
    slog::Error("connection failed!!!"); // expect: log message should not contain excessive punctuation or special characters
    slog::Warn("warning: something went wrong..."); // expect: log message should not contain excessive punctuation or special characters

    slog::Info("server started");
    slog::Error("connection failed");
    slog::Warn("something went wrong");
}

fn sensitive_data() {
    let password = "secret123";
    let api_key = "key123";
    let token = "token123";

    slog::Info("user password: " + password); // expect: log message may contain sensitive data (keyword: password)
    slog::Debug("api_key=" + api_key); // expect: log message may contain sensitive data (keyword: api_key)
    slog::Info("token: " + token); // expect: log message may contain sensitive data (keyword: token)

    slog::Info("user login successful");
    slog::Debug("api request completed");
    slog::Info("session validated");
    slog::Info("user " + user + " logged in with token");
}

fn context_methods(ctx: Context) {
    slog::InfoContext(ctx, "Starting service"); // expect: log message should start with lowercase letter
    slog::ErrorContext(ctx, "Failed to process"); // expect: log message should start with lowercase letter

    slog::InfoContext(ctx, "starting service");
    slog::ErrorContext(ctx, "failed to process");
}

fn valid_messages() {
    slog::Info("server started successfully");
    slog::Debug("processing request");
    slog::Warn("connection timeout");
    slog::Error("failed to read file");
}

fn suppressed() {
    // log-lint: allow(sensitive-data) reason="names the field, not its value"
    slog::Info("password policy updated");
    slog::Warn("token cache warmed"); // log-lint: allow(all)
}
