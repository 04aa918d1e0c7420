mod transcription;
