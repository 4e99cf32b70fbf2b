// A small service written against a receiver-style logger.

fn start_server(logger: &Logger) -> Result<(), Error> {
    logger.Info("Starting HTTP server on :8080"); // expect: log message should start with lowercase letter

    router.route("/", |request| {
        logger.Info("handling request");
        Response::ok()
    });

    logger.Info("server is ready");
    serve(":8080")
}

fn connect_db(logger: &Logger, password: &str) -> Result<(), Error> {
    logger.Info("connecting to database");

    logger.Debug("connection string with password: " + password); // expect: log message may contain sensitive data (keyword: password)

    logger.Info("database connected successfully");
    Ok(())
}

fn process_request(logger: &Logger, ctx: Context, user_id: &str) {
    logger.InfoContext(ctx, "processing user request");

    logger.InfoContext(ctx, "обработка запроса"); // expect: log message should be in English only

    logger.InfoContext(ctx, "request processed successfully");
}

fn notify_user(logger: &Logger) {
    logger.Info("sending notification 📧"); // expect: log message should not contain emojis
    logger.Info("notification sent!!!"); // expect: log message should not contain excessive punctuation or special characters
}
