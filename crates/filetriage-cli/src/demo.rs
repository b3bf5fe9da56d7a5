/// Built-in demonstration dataset.
///
/// A representative batch of filenames covering every category plus a
/// handful of extension-free and unlisted-extension names, used when the
/// tool is invoked with `--demo`.
pub const DEMO_FILENAMES: &[&str] = &[
    // Documents
    "project_proposal.docx",
    "technical_specification.pdf",
    "meeting_minutes.txt",
    "user_manual.doc",
    "requirements_document.rtf",
    // Images
    "corporate_logo.png",
    "presentation_slide.jpg",
    "infographic_design.gif",
    "website_banner.jpeg",
    "icon_collection.bmp",
    // Audio
    "conference_recording.mp3",
    "podcast_episode.wav",
    "training_audio.flac",
    "notification_sound.aac",
    // Video
    "training_video.mp4",
    "presentation_demo.avi",
    "tutorial_content.mkv",
    "promotional_video.mov",
    // Archives
    "backup_archive.zip",
    "software_package.rar",
    "data_backup.7z",
    "system_files.tar",
    // Source code
    "main_application.cpp",
    "utility_functions.c",
    "data_processor.py",
    "web_interface.html",
    "style_definitions.js",
    // Miscellaneous
    "readme_file",
    "configuration.ini",
    "database_schema.sql",
    "log_entries.log",
    "system_preferences.cfg",
];
